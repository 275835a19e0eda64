use std::sync::LazyLock;

use quiz_core::model::{Question, QuestionSet};

static FALLBACK: LazyLock<QuestionSet> = LazyLock::new(|| {
    let questions = [
        (
            "Italie",
            "Une pâte ronde garnie de tomate et mozzarella.",
            "Pizza",
            ["Pizza", "Pasta", "Risotto"],
            "La Margherita a été créée en l'honneur de la reine Marguerite.",
        ),
        (
            "Japon",
            "Riz vinaigré accompagné de poisson cru.",
            "Sushi",
            ["Sushi", "Ramen", "Tempura"],
            "À l'origine, c'était une méthode de conservation du poisson.",
        ),
        (
            "Mexique",
            "Galette de maïs garnie de viande et légumes.",
            "Tacos",
            ["Tacos", "Burrito", "Enchiladas"],
            "Il existe des milliers de variétés de tacos au Mexique.",
        ),
    ]
    .into_iter()
    .map(|(country, description, answer, options, fun_fact)| {
        Question::new(
            country,
            description,
            answer,
            options.map(String::from).to_vec(),
            fun_fact,
        )
        .expect("fallback question should be valid")
    })
    .collect();

    QuestionSet::new(questions).expect("fallback batch should not be empty")
});

/// Fixed batch served whenever the generator cannot deliver.
///
/// # Panics
///
/// Panics if the built-in questions are invalid, which the tests rule out.
#[must_use]
pub fn fallback_questions() -> QuestionSet {
    FALLBACK.clone()
}
