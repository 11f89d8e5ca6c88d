//! Kitten update builder.

use chrono::NaiveDate;
use kitten_core::enums::{KittenStatus, Sex};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KittenUpdate {
    pub name: Option<String>,
    pub birth_date: Option<Option<NaiveDate>>,
    pub rescue_date: Option<Option<NaiveDate>>,
    pub color: Option<Option<String>>,
    pub sex: Option<Sex>,
    pub status: Option<KittenStatus>,
    pub notes: Option<Option<String>>,
}

#[derive(Default)]
pub struct KittenUpdateBuilder(KittenUpdate);

impl KittenUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(KittenUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn birth_date(mut self, birth_date: Option<NaiveDate>) -> Self {
        self.0.birth_date = Some(birth_date);
        self
    }

    #[must_use]
    pub fn rescue_date(mut self, rescue_date: Option<NaiveDate>) -> Self {
        self.0.rescue_date = Some(rescue_date);
        self
    }

    #[must_use]
    pub fn color(mut self, color: Option<String>) -> Self {
        self.0.color = Some(color);
        self
    }

    #[must_use]
    pub fn sex(mut self, sex: Sex) -> Self {
        self.0.sex = Some(sex);
        self
    }

    #[must_use]
    pub fn status(mut self, status: KittenStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.0.notes = Some(notes);
        self
    }

    #[must_use]
    pub fn build(self) -> KittenUpdate {
        self.0
    }
}
