use std::{collections::HashMap, sync::Arc};

use futures::lock::Mutex;

use crate::{Booking, Event};

database_derived!(
    /// Reference implementation
    #[derive(Default)]
    pub struct ReferenceDb {
        pub events: Arc<Mutex<HashMap<String, Event>>>,
        pub bookings: Arc<Mutex<HashMap<String, Booking>>>,
    }
);

impl ReferenceDb {
    /// Remove all stored documents
    pub async fn clear(&self) {
        self.events.lock().await.clear();
        self.bookings.lock().await.clear();
    }
}
