use crate::model::Question;

pub const ALL_CATEGORIES: &str = "All";

/// `"All"` seguido de las categorías del banco, en orden de aparición y sin repetir.
pub fn categories(questions: &[Question]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for q in questions {
        if !out[1..].iter().any(|c| c == &q.category) {
            out.push(q.category.clone());
        }
    }
    out
}

pub fn filter<'a>(questions: &'a [Question], selected: &str) -> Vec<&'a Question> {
    if selected == ALL_CATEGORIES {
        questions.iter().collect()
    } else {
        questions.iter().filter(|q| q.category == selected).collect()
    }
}
