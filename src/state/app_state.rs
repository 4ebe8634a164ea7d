//! Application state definitions

use super::carousel::CarouselState;
use super::forms::{InquiryForm, LeadForm, NotifyForm};
use super::popup_state::PopupState;
use crate::i18n::Localizer;

/// Page section holding keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Hero with the "notify me" form
    #[default]
    Hero,
    /// Contact section with the inquiry form
    Contact,
}

/// Identifies the form a dispatch belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSlot {
    Hero,
    Contact,
}

impl From<Section> for FormSlot {
    fn from(section: Section) -> Self {
        match section {
            Section::Hero => FormSlot::Hero,
            Section::Contact => FormSlot::Contact,
        }
    }
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    pub localizer: Localizer,
    pub focus: Section,
    pub hero_form: NotifyForm,
    pub contact_form: InquiryForm,
    pub popup: PopupState,
    pub carousel: CarouselState,
}

impl AppState {
    pub fn new(hero_form: NotifyForm, contact_form: InquiryForm) -> Self {
        Self {
            localizer: Localizer::default(),
            focus: Section::default(),
            hero_form,
            contact_form,
            popup: PopupState::new(),
            carousel: CarouselState::new(),
        }
    }

    pub fn form(&self, slot: FormSlot) -> &dyn LeadForm {
        match slot {
            FormSlot::Hero => &self.hero_form,
            FormSlot::Contact => &self.contact_form,
        }
    }

    pub fn form_mut(&mut self, slot: FormSlot) -> &mut dyn LeadForm {
        match slot {
            FormSlot::Hero => &mut self.hero_form,
            FormSlot::Contact => &mut self.contact_form,
        }
    }
}
