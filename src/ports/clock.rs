use chrono::NaiveDateTime;

/// Source of the generation timestamp.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}
