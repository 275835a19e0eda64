pub(crate) mod game;
mod intro;
mod legal;
mod loading;
mod map;
mod result;
mod trap;

pub use game::GameView;
pub use intro::IntroView;
pub use legal::LegalModal;
pub use loading::LoadingView;
pub use map::MapView;
pub use result::ResultView;
pub use trap::SauceTrap;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
