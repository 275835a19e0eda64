use quiz_core::{Session, Status};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub won: bool,
    pub emoji: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub score: u32,
    /// Every badge earned this run of the app, in award order.
    pub badges: Vec<String>,
}

/// Returns `None` unless the session has ended.
#[must_use]
pub fn map_result(session: &Session) -> Option<ResultVm> {
    let won = match session.status() {
        Status::Won => true,
        Status::Lost => false,
        _ => return None,
    };

    let (emoji, headline, tagline) = if won {
        ("🥂", "Service Impeccable !", "Tu as régalé tout le monde !")
    } else {
        ("🩹", "C'est la Cata !", "Le chef a glissé dans la marmite...")
    };

    Some(ResultVm {
        won,
        emoji,
        headline,
        tagline,
        score: session.score(),
        badges: session.earned_badges().names(),
    })
}
