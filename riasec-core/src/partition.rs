//! Fixed assignment of questionnaire positions to categories.
//!
//! Occupation reference data is defined in the same category space, so the
//! table must not change. Positions are 1-indexed.

use crate::Category;

/// Number of questions in the questionnaire.
pub const QUESTION_COUNT: usize = 60;

/// Number of questions assigned to each category.
pub const QUESTIONS_PER_CATEGORY: usize = 10;

const REALISTIC: [usize; QUESTIONS_PER_CATEGORY] = [1, 2, 13, 24, 25, 26, 38, 49, 50, 60];
const INVESTIGATIVE: [usize; QUESTIONS_PER_CATEGORY] = [3, 4, 15, 16, 28, 39, 40, 52, 53, 54];
const ARTISTIC: [usize; QUESTIONS_PER_CATEGORY] = [5, 6, 17, 18, 29, 30, 41, 42, 55, 56];
const SOCIAL: [usize; QUESTIONS_PER_CATEGORY] = [7, 8, 19, 20, 31, 32, 43, 44, 57, 58];
const ENTERPRISING: [usize; QUESTIONS_PER_CATEGORY] = [9, 10, 21, 22, 33, 34, 45, 46, 47, 59];
const CONVENTIONAL: [usize; QUESTIONS_PER_CATEGORY] = [11, 12, 14, 23, 27, 35, 36, 37, 48, 51];

/// Category-to-position table in RIASEC order.
pub static CATEGORY_PARTITION: [(Category, [usize; QUESTIONS_PER_CATEGORY]); 6] = [
    (Category::Realistic, REALISTIC),
    (Category::Investigative, INVESTIGATIVE),
    (Category::Artistic, ARTISTIC),
    (Category::Social, SOCIAL),
    (Category::Enterprising, ENTERPRISING),
    (Category::Conventional, CONVENTIONAL),
];

/// Return the ten positions assigned to `category`.
///
/// # Examples
/// ```
/// use riasec_core::{Category, partition::positions};
///
/// assert_eq!(positions(Category::Realistic)[0], 1);
/// assert_eq!(positions(Category::Conventional).len(), 10);
/// ```
#[must_use]
pub const fn positions(category: Category) -> &'static [usize; QUESTIONS_PER_CATEGORY] {
    match category {
        Category::Realistic => &REALISTIC,
        Category::Investigative => &INVESTIGATIVE,
        Category::Artistic => &ARTISTIC,
        Category::Social => &SOCIAL,
        Category::Enterprising => &ENTERPRISING,
        Category::Conventional => &CONVENTIONAL,
    }
}

/// Return the category that owns a 1-indexed `position`.
///
/// Returns `None` for positions outside `1..=60`.
#[must_use]
pub fn category_for_position(position: usize) -> Option<Category> {
    CATEGORY_PARTITION
        .iter()
        .find(|(_, positions)| positions.contains(&position))
        .map(|(category, _)| *category)
}
