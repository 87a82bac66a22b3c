pub mod gtfs {
    //! serde codec for dates in a GTFS archive which (should) have
    //! yyyymmdd format.
    use chrono::NaiveDate;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub const GTFS_DATE_FORMAT: &str = "%Y%m%d";

    pub fn deserialize_naive_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let date_str: String = String::deserialize(deserializer)?;
        chrono::NaiveDate::parse_from_str(date_str.trim(), GTFS_DATE_FORMAT)
            .map_err(|e| D::Error::custom(format!("Invalid date format '{date_str}': {e}")))
    }

    pub fn serialize_naive_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(GTFS_DATE_FORMAT).to_string())
    }
}
