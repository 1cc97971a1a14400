use crate::modules::time_entries::use_cases::delete_time_entry::command::DeleteTimeEntry;

pub struct DeleteTimeEntryBuilder {
    inner: DeleteTimeEntry,
}

impl Default for DeleteTimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl DeleteTimeEntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: DeleteTimeEntry {
                time_entry_id: "te-fixed-0001".to_string(),
                deleted_by: "user-fixed-0001".to_string(),
                deleted_at: 1_700_000_100_000,
                cascade: false,
            },
        }
    }

    pub fn time_entry_id(mut self, v: impl Into<String>) -> Self {
        self.inner.time_entry_id = v.into();
        self
    }

    pub fn deleted_by(mut self, v: impl Into<String>) -> Self {
        self.inner.deleted_by = v.into();
        self
    }

    pub fn cascade(mut self) -> Self {
        self.inner.cascade = true;
        self
    }

    pub fn build(self) -> DeleteTimeEntry {
        self.inner
    }
}
