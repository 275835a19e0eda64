use dioxus::prelude::*;

use crate::vm::TrapVm;

/// The chef dangling over a pot of sauce, lower with every mistake.
#[component]
pub fn SauceTrap(trap: TrapVm) -> Element {
    let chef_class = if trap.fallen {
        "trap__chef trap__chef--fallen"
    } else {
        "trap__chef"
    };

    rsx! {
        div { class: "trap",
            if !trap.fallen {
                div { class: "trap__rope", style: "height: {trap.chef_top_percent}%;" }
            }
            div { class: chef_class, style: "top: {trap.chef_top_percent}%;",
                "{trap.mood.emoji()}"
            }
            div { class: "trap__pot",
                div { class: "trap__sauce" }
            }
            div { class: "trap__danger", "Danger: {trap.danger_percent}%" }
        }
    }
}
