// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Page model: the elements the directory client reads and rewrites.
//!
//! Element IDs match the page markup: `activities-list`, `activity`,
//! `signup-form`, `email` and `message`.

use super::status::MessageBox;
use askama::Template;
use std::fmt::Write as _;

pub const LOADING_NOTICE: &str = "Loading activities...";
pub const LOAD_FAILED_NOTICE: &str = "Failed to load activities. Please try again later.";
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";
pub const NO_PARTICIPANTS: &str = "No participants yet";

/// Contents of `#activities-list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivitiesList {
    /// Initial markup, before the first load completes.
    Loading,
    Cards(Vec<ActivityCard>),
    /// Static notice shown after a failed load.
    LoadFailed,
}

/// One activity's detail card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: ParticipantList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantList {
    /// Single "no participants" row; carries no controls.
    Placeholder,
    Rows(Vec<ParticipantRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    pub email: String,
    pub unregister: UnregisterControl,
}

/// Inline control that unregisters one participant from one activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnregisterControl {
    pub activity: String,
    pub email: String,
}

impl ActivityCard {
    /// Number of rendered rows, counting the placeholder row.
    pub fn row_count(&self) -> usize {
        match &self.participants {
            ParticipantList::Placeholder => 1,
            ParticipantList::Rows(rows) => rows.len(),
        }
    }

    pub fn rows(&self) -> &[ParticipantRow] {
        match &self.participants {
            ParticipantList::Placeholder => &[],
            ParticipantList::Rows(rows) => rows.as_slice(),
        }
    }

    pub fn unregister_controls(&self) -> impl Iterator<Item = &UnregisterControl> {
        self.rows().iter().map(|row| &row.unregister)
    }

    pub fn availability(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn placeholder() -> Self {
        Self {
            value: String::new(),
            label: SELECT_PLACEHOLDER.to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

/// `#activity` selection control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivitySelect {
    options: Vec<SelectOption>,
    selected: Option<String>,
}

impl Default for ActivitySelect {
    fn default() -> Self {
        Self {
            options: vec![SelectOption::placeholder()],
            selected: None,
        }
    }
}

impl ActivitySelect {
    /// Replace the options with a placeholder followed by one entry per name.
    ///
    /// A selection that still names an offered activity is kept.
    pub fn replace_options<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        self.options = std::iter::once(SelectOption::placeholder())
            .chain(names.into_iter().map(|name| SelectOption {
                value: name.to_string(),
                label: name.to_string(),
            }))
            .collect();

        if let Some(selected) = &self.selected {
            if !self.options.iter().any(|o| &o.value == selected) {
                self.selected = None;
            }
        }
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Select an offered activity. Returns false if no option has that value.
    pub fn select(&mut self, activity: &str) -> bool {
        if activity.is_empty() || !self.options.iter().any(|o| o.value == activity) {
            return false;
        }
        self.selected = Some(activity.to_string());
        true
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn reset(&mut self) {
        self.selected = None;
    }
}

/// `#signup-form` input state (the `#email` field).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
}

/// The whole page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub activities_list: ActivitiesList,
    pub activity_select: ActivitySelect,
    pub signup_form: SignupForm,
    pub message: MessageBox,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            activities_list: ActivitiesList::Loading,
            activity_select: ActivitySelect::default(),
            signup_form: SignupForm::default(),
            message: MessageBox::default(),
        }
    }
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[ActivityCard] {
        match &self.activities_list {
            ActivitiesList::Cards(cards) => cards.as_slice(),
            _ => &[],
        }
    }

    pub fn card(&self, name: &str) -> Option<&ActivityCard> {
        self.cards().iter().find(|c| c.name == name)
    }

    /// Reset the signup form: clear the email and drop the selection.
    pub fn reset_form(&mut self) {
        self.signup_form.email.clear();
        self.activity_select.reset();
    }

    /// Render as HTML using the page's element IDs. Server text is escaped.
    pub fn to_html(&self) -> askama::Result<String> {
        let notice = match &self.activities_list {
            ActivitiesList::Loading => Some(LOADING_NOTICE),
            ActivitiesList::LoadFailed => Some(LOAD_FAILED_NOTICE),
            ActivitiesList::Cards(_) => None,
        };
        let selected = self.activity_select.selected();
        let options = self
            .activity_select
            .options()
            .iter()
            .map(|option| OptionView {
                value: &option.value,
                label: &option.label,
                selected: !option.is_placeholder() && selected == Some(option.value.as_str()),
            })
            .collect();
        let (message_class, message_text) = match self.message.visible_message() {
            Some(message) => (message.kind.css_class(), message.text.as_str()),
            None => ("hidden", ""),
        };

        PageTemplate {
            notice,
            cards: self.cards(),
            no_participants: NO_PARTICIPANTS,
            email: &self.signup_form.email,
            options,
            message_class,
            message_text,
        }
        .render()
    }

    /// Render for a terminal.
    pub fn to_text(&self) -> String {
        let mut text = String::new();

        match &self.activities_list {
            ActivitiesList::Loading => {
                let _ = writeln!(text, "{}", LOADING_NOTICE);
            }
            ActivitiesList::LoadFailed => {
                let _ = writeln!(text, "{}", LOAD_FAILED_NOTICE);
            }
            ActivitiesList::Cards(cards) => {
                for card in cards {
                    let _ = writeln!(text, "== {} ==", card.name);
                    let _ = writeln!(text, "{}", card.description);
                    let _ = writeln!(text, "Schedule: {}", card.schedule);
                    let _ = writeln!(text, "Availability: {}", card.availability());
                    let _ = writeln!(text, "Participants:");
                    match &card.participants {
                        ParticipantList::Placeholder => {
                            let _ = writeln!(text, "  ({})", NO_PARTICIPANTS);
                        }
                        ParticipantList::Rows(rows) => {
                            for row in rows {
                                let _ = writeln!(text, "  - {} [x]", row.email);
                            }
                        }
                    }
                    text.push('\n');
                }
            }
        }

        if let Some(message) = self.message.visible_message() {
            let _ = writeln!(text, "[{}] {}", message.kind.css_class(), message.text);
        }

        text
    }
}

struct OptionView<'a> {
    value: &'a str,
    label: &'a str,
    selected: bool,
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    notice: Option<&'static str>,
    cards: &'a [ActivityCard],
    no_participants: &'static str,
    email: &'a str,
    options: Vec<OptionView<'a>>,
    message_class: &'static str,
    message_text: &'a str,
}
