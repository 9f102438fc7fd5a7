auto_derived!(
    /// Booking made by a user against an event
    #[serde(rename_all = "camelCase")]
    pub struct Booking {
        /// Booking Id
        #[serde(rename = "_id")]
        pub id: String,

        /// Email of the user who booked
        pub booked_by: String,

        /// Id of the booked event
        ///
        /// Same string representation as `Event::id`.
        pub event_id: String,

        /// Creation timestamp
        pub created_at: String,

        /// Arbitrary user-supplied fields
        #[serde(flatten)]
        pub extra: serde_json::Map<String, serde_json::Value>,
    }
);
