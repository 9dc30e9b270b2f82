use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::models::event::{
    Event, EventColor, EventDetails, EventError, EventId, EventTiming, TimeField,
};

/// Whether the dialog creates a new event or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    Add,
    Edit(EventId),
}

/// Hour and minute picked independently in the form.
///
/// The time only exists once an hour is chosen; an unset minute counts as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeInput {
    pub hour: Option<u32>,
    pub minute: Option<u32>,
}

impl TimeInput {
    pub fn from_time(time: Option<NaiveTime>) -> Self {
        Self {
            hour: time.map(|t| t.hour()),
            minute: time.map(|t| t.minute()),
        }
    }

    pub fn set(&mut self, time: NaiveTime) {
        *self = Self::from_time(Some(time));
    }

    pub fn to_time(self) -> Option<NaiveTime> {
        let hour = self.hour?;
        NaiveTime::from_hms_opt(hour, self.minute.unwrap_or(0), 0)
    }
}

/// State for the event editing dialog
#[derive(Debug, Clone)]
pub struct EventDialogState {
    pub mode: DialogMode,
    /// The cell date for new events, the event's own date when editing
    pub date: NaiveDate,
    pub name: String,
    pub all_day: bool,
    /// Kept while "all day" is ticked so unticking restores them
    pub start: TimeInput,
    pub end: TimeInput,
    pub color: EventColor,
    pub error_message: Option<String>,
}

impl EventDialogState {
    pub fn new_event(date: NaiveDate) -> Self {
        Self {
            mode: DialogMode::Add,
            date,
            name: String::new(),
            all_day: false,
            start: TimeInput::default(),
            end: TimeInput::default(),
            color: EventColor::default(),
            error_message: None,
        }
    }

    pub fn from_event(event: &Event) -> Self {
        Self {
            mode: DialogMode::Edit(event.id),
            date: event.date,
            name: event.name.clone(),
            all_day: event.is_all_day(),
            start: TimeInput::from_time(event.start_time()),
            end: TimeInput::from_time(event.end_time()),
            color: event.color,
            error_message: None,
        }
    }

    pub fn is_new(&self) -> bool {
        self.mode == DialogMode::Add
    }

    pub fn title(&self) -> &'static str {
        if self.is_new() {
            "Add Event"
        } else {
            "Edit Event"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_new() {
            "Add"
        } else {
            "Edit"
        }
    }

    /// Id of the event that the Delete button removes, if any
    pub fn deletable_event(&self) -> Option<EventId> {
        match self.mode {
            DialogMode::Add => None,
            DialogMode::Edit(id) => Some(id),
        }
    }

    /// Build validated event details from the form fields.
    pub fn to_details(&self) -> Result<EventDetails, EventError> {
        if self.name.trim().is_empty() {
            return Err(EventError::EmptyName);
        }

        let timing = if self.all_day {
            EventTiming::AllDay
        } else {
            let start = self
                .start
                .to_time()
                .ok_or(EventError::MissingTime(TimeField::Start))?;
            let end = self
                .end
                .to_time()
                .ok_or(EventError::MissingTime(TimeField::End))?;
            EventTiming::Timed { start, end }
        };

        let details = EventDetails {
            name: self.name.clone(),
            date: self.date,
            color: self.color,
            timing,
        };
        details.validate()?;

        Ok(details)
    }

    /// Validate the form, recording the failure for display.
    pub fn submit(&mut self) -> Result<EventDetails, EventError> {
        match self.to_details() {
            Ok(details) => {
                self.error_message = None;
                Ok(details)
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
                Err(e)
            }
        }
    }
}
