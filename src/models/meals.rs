// ABOUTME: Built-in meal catalog with per-item calories and selection totalling

use std::fmt;

/// Meal category for the calorie estimator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealCategory {
    /// All categories in display order
    pub fn all() -> &'static [MealCategory] {
        &[Self::Breakfast, Self::Lunch, Self::Snack, Self::Dinner]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Snack => "Snack",
            Self::Dinner => "Dinner",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Breakfast => Self::Lunch,
            Self::Lunch => Self::Snack,
            Self::Snack => Self::Dinner,
            Self::Dinner => Self::Breakfast,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Self::Breakfast => Self::Dinner,
            Self::Lunch => Self::Breakfast,
            Self::Snack => Self::Lunch,
            Self::Dinner => Self::Snack,
        }
    }
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One item in the meal catalog
#[derive(Debug, Clone)]
pub struct MealItem {
    pub name: &'static str,
    pub calories: u32,
}

/// Fixed catalog of meals with calorie values
pub struct MealCatalog;

impl MealCatalog {
    /// Items available for a category
    pub fn items(category: MealCategory) -> &'static [MealItem] {
        match category {
            MealCategory::Breakfast => &[
                MealItem { name: "Oatmeal", calories: 150 },
                MealItem { name: "Boiled Eggs", calories: 78 },
                MealItem { name: "Paratha", calories: 250 },
                MealItem { name: "Idli", calories: 70 },
                MealItem { name: "Dosa", calories: 120 },
                MealItem { name: "Poha", calories: 200 },
                MealItem { name: "Upma", calories: 180 },
                MealItem { name: "Bread Toast", calories: 80 },
                MealItem { name: "Paneer Bhurji", calories: 220 },
                MealItem { name: "Vegetable Sandwich", calories: 160 },
            ],
            MealCategory::Lunch => &[
                MealItem { name: "Chapati + Dal", calories: 300 },
                MealItem { name: "Rice + Rajma", calories: 350 },
                MealItem { name: "Rice + Chole", calories: 360 },
                MealItem { name: "Dal Khichdi", calories: 250 },
                MealItem { name: "Vegetable Pulao", calories: 300 },
                MealItem { name: "Chicken Curry", calories: 400 },
                MealItem { name: "Paneer Curry", calories: 350 },
            ],
            MealCategory::Snack => &[
                MealItem { name: "Samosa", calories: 150 },
                MealItem { name: "Kachori", calories: 180 },
                MealItem { name: "Sandwich", calories: 200 },
                MealItem { name: "Burger (small)", calories: 250 },
            ],
            MealCategory::Dinner => &[
                MealItem { name: "Chapati + Dal", calories: 300 },
                MealItem { name: "Rice + Rajma", calories: 350 },
                MealItem { name: "Vegetable Curry + Roti", calories: 320 },
                MealItem { name: "Paneer Curry", calories: 350 },
                MealItem { name: "Chicken Curry", calories: 400 },
            ],
        }
    }
}

/// Quantities picked from one category, indexed by catalog position
#[derive(Debug, Clone)]
pub struct MealSelection {
    pub category: MealCategory,
    pub quantities: Vec<u32>,
}

impl MealSelection {
    pub fn new(category: MealCategory) -> Self {
        Self {
            category,
            quantities: vec![0; MealCatalog::items(category).len()],
        }
    }

    /// Switch category, discarding quantities picked so far
    pub fn set_category(&mut self, category: MealCategory) {
        *self = Self::new(category);
    }

    pub fn increment(&mut self, index: usize) {
        if let Some(qty) = self.quantities.get_mut(index) {
            *qty = qty.saturating_add(1);
        }
    }

    pub fn decrement(&mut self, index: usize) {
        if let Some(qty) = self.quantities.get_mut(index) {
            *qty = qty.saturating_sub(1);
        }
    }

    /// Total calories for the current quantities
    pub fn total_calories(&self) -> u32 {
        MealCatalog::items(self.category)
            .iter()
            .zip(&self.quantities)
            .map(|(item, qty)| item.calories * qty)
            .sum()
    }

    pub fn has_selection(&self) -> bool {
        self.quantities.iter().any(|&q| q > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_all_categories() {
        for category in MealCategory::all() {
            assert!(!MealCatalog::items(*category).is_empty());
        }
        assert_eq!(MealCatalog::items(MealCategory::Breakfast).len(), 10);
        assert_eq!(MealCatalog::items(MealCategory::Snack).len(), 4);
    }

    #[test]
    fn test_category_cycle() {
        let mut category = MealCategory::Breakfast;
        for _ in 0..MealCategory::all().len() {
            category = category.next();
        }
        assert_eq!(category, MealCategory::Breakfast);
        assert_eq!(MealCategory::Breakfast.previous(), MealCategory::Dinner);
    }

    #[test]
    fn test_total_calories() {
        let mut selection = MealSelection::new(MealCategory::Breakfast);
        assert_eq!(selection.total_calories(), 0);
        assert!(!selection.has_selection());

        // Oatmeal x2 + Boiled Eggs x1
        selection.increment(0);
        selection.increment(0);
        selection.increment(1);
        assert_eq!(selection.total_calories(), 150 * 2 + 78);
        assert!(selection.has_selection());

        selection.decrement(1);
        assert_eq!(selection.total_calories(), 300);
    }

    #[test]
    fn test_decrement_floors_at_zero() {
        let mut selection = MealSelection::new(MealCategory::Snack);
        selection.decrement(0);
        assert_eq!(selection.quantities[0], 0);
    }

    #[test]
    fn test_out_of_range_index_ignored() {
        let mut selection = MealSelection::new(MealCategory::Snack);
        selection.increment(999);
        assert_eq!(selection.total_calories(), 0);
    }

    #[test]
    fn test_set_category_resets_quantities() {
        let mut selection = MealSelection::new(MealCategory::Lunch);
        selection.increment(0);
        selection.set_category(MealCategory::Dinner);
        assert_eq!(selection.category, MealCategory::Dinner);
        assert!(!selection.has_selection());
    }
}
