use lab_core::CoreError;
use lab_core::entities::ResearchItem;

use crate::tags;

/// Uncommitted copy of a research item being created or edited.
///
/// Mutations never touch the stored item; the collection copies the draft
/// back only on commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResearchDraft {
    title: String,
    equipment: Vec<String>,
    reagents: Vec<String>,
}

impl ResearchDraft {
    #[must_use]
    pub fn from_item(item: &ResearchItem) -> Self {
        Self {
            title: item.title.clone(),
            equipment: item.equipment.clone(),
            reagents: item.reagents.clone(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn equipment(&self) -> &[String] {
        &self.equipment
    }

    #[must_use]
    pub fn reagents(&self) -> &[String] {
        &self.reagents
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn add_equipment(&mut self) {
        tags::push_empty(&mut self.equipment);
    }

    pub fn update_equipment(&mut self, index: usize, value: impl Into<String>) -> bool {
        tags::update(&mut self.equipment, index, value)
    }

    pub fn remove_equipment(&mut self, index: usize) -> bool {
        tags::remove(&mut self.equipment, index)
    }

    pub fn add_reagent(&mut self) {
        tags::push_empty(&mut self.reagents);
    }

    pub fn update_reagent(&mut self, index: usize, value: impl Into<String>) -> bool {
        tags::update(&mut self.reagents, index, value)
    }

    pub fn remove_reagent(&mut self, index: usize) -> bool {
        tags::remove(&mut self.reagents, index)
    }

    /// Build the item this draft would commit as, under `id`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the title is empty.
    pub fn to_item(&self, id: &str) -> Result<ResearchItem, CoreError> {
        let item = ResearchItem {
            id: id.to_string(),
            title: self.title.clone(),
            equipment: self.equipment.clone(),
            reagents: self.reagents.clone(),
        };
        item.validate()?;
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_item_copies_lists() {
        let item = ResearchItem::new("Neuron differentiation")
            .with_equipment(["Microscope"])
            .with_reagents(["NGF", "BDNF"]);
        let mut draft = ResearchDraft::from_item(&item);
        draft.add_reagent();
        draft.update_reagent(2, "Laminin");

        assert_eq!(draft.reagents(), ["NGF", "BDNF", "Laminin"]);
        assert_eq!(item.reagents, vec!["NGF", "BDNF"], "source item untouched");
    }

    #[test]
    fn to_item_rejects_empty_title() {
        let mut draft = ResearchDraft::default();
        draft.add_equipment();
        assert!(draft.to_item("rsi-00000001").unwrap_err().is_validation());

        draft.set_title("Cell culture");
        let item = draft.to_item("rsi-00000001").unwrap();
        assert_eq!(item.id, "rsi-00000001");
        assert_eq!(item.equipment, vec![String::new()]);
    }

    #[test]
    fn equipment_slot_edits() {
        let mut draft = ResearchDraft::default();
        draft.add_equipment();
        draft.add_equipment();
        assert!(draft.update_equipment(0, "PCR"));
        assert!(draft.remove_equipment(1));
        assert!(!draft.remove_equipment(5));
        assert_eq!(draft.equipment(), ["PCR"]);
    }
}
