use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Onboarding checklist flags attached to a submission.
///
/// `items` exposes the flags in a fixed order; rendered documents depend on
/// that order being stable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Checklist {
    pub cheque: bool,
    pub letterhead: bool,
}

impl Checklist {
    pub fn new(cheque: bool, letterhead: bool) -> Self {
        Self { cheque, letterhead }
    }

    /// Named items in document order
    pub fn items(&self) -> [(&'static str, bool); 2] {
        [("Cheque", self.cheque), ("Letterhead", self.letterhead)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_order_is_fixed() {
        let checklist = Checklist::new(true, false);
        let items = checklist.items();

        assert_eq!(items[0], ("Cheque", true));
        assert_eq!(items[1], ("Letterhead", false));
    }

    #[test]
    fn test_default_is_all_unchecked() {
        let checklist = Checklist::default();
        assert!(checklist.items().iter().all(|(_, checked)| !checked));
    }
}
