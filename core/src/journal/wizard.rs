use serde::{Deserialize, Serialize};

use crate::journal::review::ReviewRecord;
use crate::prelude::{JournalError, JournalResult};
use crate::profile::{AxisPreset, TasteAxis, TasteVector};

/// The five screens of the review form, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    Basics,
    Experience,
    Taste,
    Media,
    Summary,
}

impl WizardStep {
    /// Advances one screen, saturating at the summary.
    pub fn next(self) -> Self {
        match self {
            WizardStep::Basics => WizardStep::Experience,
            WizardStep::Experience => WizardStep::Taste,
            WizardStep::Taste => WizardStep::Media,
            WizardStep::Media => WizardStep::Summary,
            WizardStep::Summary => WizardStep::Summary,
        }
    }

    /// Steps back one screen, saturating at the start.
    pub fn back(self) -> Self {
        match self {
            WizardStep::Basics => WizardStep::Basics,
            WizardStep::Experience => WizardStep::Basics,
            WizardStep::Taste => WizardStep::Experience,
            WizardStep::Media => WizardStep::Taste,
            WizardStep::Summary => WizardStep::Media,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Basics => "Basics",
            WizardStep::Experience => "Experience",
            WizardStep::Taste => "Taste",
            WizardStep::Media => "Media",
            WizardStep::Summary => "Summary",
        }
    }
}

/// The entire review form as one record; every edit flows through
/// [`reduce`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub step: WizardStep,
    pub dish: String,
    pub place: String,
    pub notes: String,
    pub kuchisabishii: u8,
    pub stars: f32,
    pub taste: TasteVector,
    pub photo_refs: Vec<String>,
    pub tags: Vec<String>,
}

impl ReviewDraft {
    pub fn new(preset: AxisPreset) -> Self {
        Self {
            step: WizardStep::Basics,
            dish: String::new(),
            place: String::new(),
            notes: String::new(),
            kuchisabishii: 3,
            stars: 3.0,
            taste: TasteVector::from_preset(preset, &[]),
            photo_refs: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Turns the draft into a journal record.
    pub fn finalize(&self, id: u64, timestamp: f64) -> JournalResult<ReviewRecord> {
        if self.dish.trim().is_empty() {
            return Err(JournalError::IncompleteDraft("dish name is required".into()));
        }
        if !(1..=5).contains(&self.kuchisabishii) {
            return Err(JournalError::IncompleteDraft(
                "craving rating must be between 1 and 5".into(),
            ));
        }

        Ok(ReviewRecord {
            id,
            dish: self.dish.trim().to_string(),
            place: self.place.trim().to_string(),
            notes: self.notes.clone(),
            kuchisabishii: self.kuchisabishii,
            stars: self.stars,
            tags: self.tags.clone(),
            timestamp,
            taste: self.taste.clone(),
        })
    }
}

/// Edits accepted by the wizard.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardAction {
    SetDish(String),
    SetPlace(String),
    SetNotes(String),
    SetKuchisabishii(u8),
    SetStars(f32),
    SetTaste(TasteAxis, f32),
    AddTag(String),
    AddPhoto(String),
    Next,
    Back,
    Reset(AxisPreset),
}

/// Applies one action and returns the next draft state.
pub fn reduce(mut draft: ReviewDraft, action: WizardAction) -> ReviewDraft {
    match action {
        WizardAction::SetDish(dish) => draft.dish = dish,
        WizardAction::SetPlace(place) => draft.place = place,
        WizardAction::SetNotes(notes) => draft.notes = notes,
        WizardAction::SetKuchisabishii(rating) => draft.kuchisabishii = rating.clamp(1, 5),
        WizardAction::SetStars(stars) => draft.stars = stars.clamp(0.0, 5.0),
        WizardAction::SetTaste(axis, value) => {
            draft.taste.set(axis, value);
        }
        WizardAction::AddTag(tag) => {
            let tag = tag.trim().to_string();
            if !tag.is_empty() && !draft.tags.contains(&tag) {
                draft.tags.push(tag);
            }
        }
        WizardAction::AddPhoto(reference) => draft.photo_refs.push(reference),
        WizardAction::Next => draft.step = draft.step.next(),
        WizardAction::Back => draft.step = draft.step.back(),
        WizardAction::Reset(preset) => draft = ReviewDraft::new(preset),
    }
    draft
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_walk_forward_and_saturate() {
        let mut draft = ReviewDraft::new(AxisPreset::Basic);
        let expected = [
            WizardStep::Experience,
            WizardStep::Taste,
            WizardStep::Media,
            WizardStep::Summary,
            WizardStep::Summary,
        ];
        for step in expected {
            draft = reduce(draft, WizardAction::Next);
            assert_eq!(draft.step, step);
        }

        draft = reduce(draft, WizardAction::Back);
        assert_eq!(draft.step, WizardStep::Media);
    }

    #[test]
    fn back_saturates_at_the_start() {
        let draft = ReviewDraft::new(AxisPreset::Basic);
        let draft = reduce(draft, WizardAction::Back);
        assert_eq!(draft.step, WizardStep::Basics);
    }

    #[test]
    fn field_edits_land_in_the_draft() {
        let mut draft = ReviewDraft::new(AxisPreset::Basic);
        draft = reduce(draft, WizardAction::SetDish("Karaage".into()));
        draft = reduce(draft, WizardAction::SetKuchisabishii(9));
        draft = reduce(draft, WizardAction::SetTaste(TasteAxis::Salty, 4.0));
        draft = reduce(draft, WizardAction::AddTag("  fried ".into()));
        draft = reduce(draft, WizardAction::AddTag("fried".into()));

        assert_eq!(draft.dish, "Karaage");
        assert_eq!(draft.kuchisabishii, 5);
        assert_eq!(draft.taste.get(TasteAxis::Salty), Some(4.0));
        assert_eq!(draft.tags, vec!["fried".to_string()]);
    }

    #[test]
    fn reset_returns_a_fresh_draft() {
        let mut draft = ReviewDraft::new(AxisPreset::Basic);
        draft = reduce(draft, WizardAction::SetDish("Onigiri".into()));
        draft = reduce(draft, WizardAction::Next);
        draft = reduce(draft, WizardAction::Reset(AxisPreset::Full));

        assert_eq!(draft.step, WizardStep::Basics);
        assert!(draft.dish.is_empty());
        assert_eq!(draft.taste.len(), 11);
    }

    #[test]
    fn finalize_requires_a_dish_name() {
        let draft = ReviewDraft::new(AxisPreset::Basic);
        let err = draft.finalize(1, 0.0).unwrap_err();
        assert!(matches!(err, JournalError::IncompleteDraft(_)));
    }

    #[test]
    fn finalize_builds_a_record() {
        let mut draft = ReviewDraft::new(AxisPreset::Basic);
        draft = reduce(draft, WizardAction::SetDish("  Omurice  ".into()));
        draft = reduce(draft, WizardAction::SetStars(4.5));

        let record = draft.finalize(7, 1234.0).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.dish, "Omurice");
        assert_eq!(record.stars, 4.5);
        assert_eq!(record.timestamp, 1234.0);
    }
}
