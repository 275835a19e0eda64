use dioxus::prelude::*;

struct LegalSection {
    heading: &'static str,
    body: &'static str,
}

const CONDUCT: [LegalSection; 3] = [
    LegalSection {
        heading: "1. Respect de la Marmite",
        body: "La Sauce est une entité vivante et sacrée. Tout participant s'engage solennellement à ne pas gaspiller de nourriture virtuelle. Si le Chef tombe, c'est un drame culinaire, pas un spectacle de divertissement.",
    },
    LegalSection {
        heading: "2. Intégrité du Quiz (Fair-Play)",
        body: "L'utilisation de moteurs de recherche, d'encyclopédies, de l'appel à un ami ou de l'intelligence artificielle pour trouver les réponses est strictement interdite. Le Chef saura si vous trichez (il possède un sixième sens développé par les vapeurs de piment).",
    },
    LegalSection {
        heading: "3. Bienveillance envers le Personnel",
        body: "Il est formellement interdit de rire de manière diabolique lorsque le Chef commence à transpirer (emoji 😰). Un peu de compassion est requise, même si ses cris sont silencieux.",
    },
];

const WHISTLEBLOWING: [LegalSection; 2] = [
    LegalSection {
        heading: "Politique de Signalement (Whistleblowing)",
        body: "Le programme \"Siffleur de Marmite\" permet à tout joueur de signaler anonymement des abus graves ou des dangers imminents dans la cuisine.",
    },
    LegalSection {
        heading: "Protection des Délateurs",
        body: "Votre anonymat est garanti par la Guilde des Assassins Culinaires. Aucune représaille ne sera tolérée, et le Chef ne viendra pas hanter votre propre cuisine... en principe.",
    },
];

const INCIDENTS: [&str; 3] = [
    "Question suggérant que la pizza à l'ananas est une spécialité italienne (Hérésie).",
    "Sauce jugée trop liquide ou manquant de sel.",
    "Chef qui ne tombe pas alors que la réponse était clairement fausse (Bug de gravité).",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegalTab {
    #[default]
    Conduct,
    Whistleblowing,
}

impl LegalTab {
    const ALL: [LegalTab; 2] = [LegalTab::Conduct, LegalTab::Whistleblowing];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            LegalTab::Conduct => "Code de Conduite",
            LegalTab::Whistleblowing => "Lanceur d'Alerte",
        }
    }

    fn sections(self) -> &'static [LegalSection] {
        match self {
            LegalTab::Conduct => &CONDUCT,
            LegalTab::Whistleblowing => &WHISTLEBLOWING,
        }
    }

    /// Incidents listed after the first section of the tab.
    fn incidents(self) -> &'static [&'static str] {
        match self {
            LegalTab::Conduct => &[],
            LegalTab::Whistleblowing => &INCIDENTS,
        }
    }
}

/// Compliance text shown over the intro screen while `open` is set.
#[component]
pub fn LegalModal(open: Signal<bool>) -> Element {
    let mut tab = use_signal(LegalTab::default);

    if !open() {
        return rsx! {};
    }

    let mut open = open;
    let active = tab();
    let (first, rest) = active.sections().split_at(1);
    let incidents = active.incidents();

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal", role: "dialog",
                div { class: "modal__header",
                    div {
                        h2 { "⚖️ Conformité & Sécurité" }
                        p { class: "modal__subtitle", "Département des Affaires Internes de la Sauce" }
                    }
                    button {
                        class: "modal__close",
                        r#type: "button",
                        aria_label: "Fermer",
                        onclick: move |_| open.set(false),
                        "×"
                    }
                }

                div { class: "modal__tabs",
                    for candidate in LegalTab::ALL {
                        button {
                            key: "{candidate.title()}",
                            class: if candidate == active { "modal__tab modal__tab--active" } else { "modal__tab" },
                            r#type: "button",
                            onclick: move |_| tab.set(candidate),
                            "{candidate.title()}"
                        }
                    }
                }

                div { class: "modal__content",
                    for section in first.iter() {
                        LegalSectionView { key: "{section.heading}", heading: section.heading, body: section.body }
                    }
                    if !incidents.is_empty() {
                        div { class: "modal__alert",
                            h4 { "🚨 Incidents à signaler immédiatement :" }
                            ul {
                                for incident in incidents.iter() {
                                    li { "{incident}" }
                                }
                            }
                        }
                    }
                    for section in rest.iter() {
                        LegalSectionView { key: "{section.heading}", heading: section.heading, body: section.body }
                    }
                }

                div { class: "modal__footer",
                    button {
                        class: "primary-button",
                        r#type: "button",
                        onclick: move |_| open.set(false),
                        "J'accepte ces conditions (et le risque)"
                    }
                }
            }
        }
    }
}

#[component]
fn LegalSectionView(heading: &'static str, body: &'static str) -> Element {
    rsx! {
        section { class: "modal__section",
            h3 { "{heading}" }
            p { "{body}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn OpenLegalModal() -> Element {
        let open = use_signal(|| true);
        rsx! { LegalModal { open } }
    }

    #[component]
    fn ClosedLegalModal() -> Element {
        let open = use_signal(|| false);
        rsx! { LegalModal { open } }
    }

    fn render(dom: &mut VirtualDom) -> String {
        dom.rebuild_in_place();
        dioxus_ssr::render(dom)
    }

    #[test]
    fn open_modal_starts_on_the_code_of_conduct() {
        let mut dom = VirtualDom::new(OpenLegalModal);
        let html = render(&mut dom);

        assert!(html.contains("modal__tab--active"), "missing active tab in {html}");
        assert!(html.contains("Respect de la Marmite"), "missing rule in {html}");
        assert!(html.contains("Bienveillance envers le Personnel"), "missing rule in {html}");
        assert!(!html.contains("Protection des Délateurs"), "other tab leaked into {html}");
    }

    #[test]
    fn closed_modal_renders_nothing() {
        let mut dom = VirtualDom::new(ClosedLegalModal);
        let html = render(&mut dom);
        assert!(!html.contains("Code de Conduite"), "modal rendered while closed: {html}");
    }

    #[test]
    fn whistleblowing_tab_lists_incidents_between_sections() {
        let tab = LegalTab::Whistleblowing;
        assert_eq!(tab.sections().len(), 2);
        assert_eq!(tab.incidents().len(), 3);
        assert_eq!(tab.sections()[1].heading, "Protection des Délateurs");
        assert!(LegalTab::Conduct.incidents().is_empty());
    }
}
