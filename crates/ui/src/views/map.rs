use dioxus::prelude::*;
use tracing::info;

use quiz_core::{GameAction, Session};
use quiz_core::model::Region;

use crate::actions::dispatch;

/// Simplified continent outline on a 100x100 canvas.
struct Continent {
    region: Region,
    path: &'static str,
    class: &'static str,
}

static CONTINENTS: [Continent; 5] = [
    Continent {
        region: Region::Africa,
        path: "M53 45 L65 45 L70 55 L75 75 L60 90 L45 80 L40 60 Z",
        class: "continent continent--africa",
    },
    Continent {
        region: Region::Europe,
        path: "M45 25 L55 20 L65 25 L60 40 L50 42 L40 35 Z",
        class: "continent continent--europe",
    },
    Continent {
        region: Region::Asia,
        path: "M65 20 L90 20 L100 40 L90 60 L70 50 L65 40 Z",
        class: "continent continent--asia",
    },
    Continent {
        region: Region::Americas,
        path: "M15 20 L35 20 L40 40 L35 80 L25 95 L10 60 L5 30 Z",
        class: "continent continent--americas",
    },
    Continent {
        region: Region::Oceania,
        path: "M80 70 L95 70 L100 85 L90 90 L80 85 Z",
        class: "continent continent--oceania",
    },
];

fn choose_region(game: Signal<Session>, region: Region) {
    info!(%region, "region chosen");
    dispatch(game, GameAction::BeginSession(region));
}

#[component]
pub fn MapView() -> Element {
    let game = use_context::<Signal<Session>>();

    rsx! {
        div { class: "screen screen--map",
            div { class: "map-toolbar",
                button {
                    class: "link-button",
                    r#type: "button",
                    onclick: move |_| dispatch(game, GameAction::ReturnToMenu),
                    "⬅ Retour au menu"
                }
            }

            div { class: "panel",
                h2 { class: "title", "Où partons-nous ? ✈️" }

                svg { class: "world-map", view_box: "0 0 100 100",
                    for continent in CONTINENTS.iter() {
                        g {
                            key: "{continent.region.id()}",
                            onclick: move |_| choose_region(game, continent.region),
                            path { class: continent.class, d: continent.path }
                        }
                    }
                }

                div { class: "region-list",
                    for region in Region::PICKABLE {
                        button {
                            key: "{region.id()}",
                            class: "region",
                            r#type: "button",
                            onclick: move |_| choose_region(game, region),
                            "{region.label()}"
                        }
                    }
                    button {
                        class: "region region--world",
                        r#type: "button",
                        onclick: move |_| choose_region(game, Region::World),
                        "{Region::World.label()}"
                    }
                }
            }
        }
    }
}
