use quiz_core::model::Difficulty;

use super::supplier::SupplyRequest;

/// System instruction and user message sent to the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QuestionPrompt {
    pub(crate) system: String,
    pub(crate) user: String,
}

fn difficulty_hint(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "Pose des questions sur les plats nationaux très connus et populaires.",
        Difficulty::Medium => {
            "Pose des questions sur des ingrédients spécifiques ou des plats un peu moins connus."
        }
        Difficulty::Hard => {
            "Pose des questions pointues sur l'histoire culinaire, les variations régionales ou des mets rares."
        }
    }
}

#[must_use]
pub(crate) fn build_prompt(request: &SupplyRequest) -> QuestionPrompt {
    let region_hint = match request.region() {
        Some(region) => {
            format!("Concentre-toi uniquement sur la cuisine de cette région : {region}.")
        }
        None => "Choisis des pays variés du monde entier.".to_string(),
    };

    let system = format!(
        "Tu es un expert culinaire mondial joyeux et passionné.\n\
         Génère un quiz sur les plats endogènes.\n\
         Le ton doit être ludique et \"ambiancé\".\n\
         {}\n\
         {region_hint}",
        difficulty_hint(request.difficulty()),
    );

    let user = format!(
        "Génère {} questions de quiz uniques.\n\
         Pour chaque question, donne le pays, une description qui sert de devinette (sans nommer le plat), \
         la bonne réponse (le nom du plat), 3 choix de réponses (dont la bonne), \
         et une anecdote amusante (funFact).",
        request.count(),
    );

    QuestionPrompt { system, user }
}
