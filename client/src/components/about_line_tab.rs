//! "About the line" tab of the influencer briefing.
//!
//! Static product-line content; the table is data so the briefing can render
//! other lines with the same component.

#[cfg(test)]
#[path = "about_line_tab_test.rs"]
mod about_line_tab_test;

use leptos::prelude::*;

/// A garment in the line with its short pitch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinePiece {
    pub name: &'static str,
    pub description: &'static str,
}

/// Briefing content for one product line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductLine {
    pub title: &'static str,
    pub purpose: &'static str,
    pub features: &'static [&'static str],
    pub pieces: &'static [LinePiece],
}

pub const DELTA_RUN_MUSCLE: ProductLine = ProductLine {
    title: "Propósito da Linha Delta Run Muscle",
    purpose: "A linha Delta Run Muscle foi criada para atender atletas e amantes de fitness que buscam \
              peças com alta performance, conforto e estilo. Cada peça combina tecnologia inovadora, \
              materiais premium e design moderno, garantindo durabilidade e versatilidade para treinos \
              intensos ou uso casual.",
    features: &[
        "Tecnologia de secagem rápida e respirabilidade para máxima performance.",
        "Design ergonômico que valoriza o corpo e oferece liberdade de movimento.",
        "Estilo versátil, perfeito para academia, corridas ou até mesmo looks casuais.",
    ],
    pieces: &[
        LinePiece {
            name: "Camisetas Performance",
            description: "Feitas com tecido leve e resistente, ideais para treinos intensos.",
        },
        LinePiece {
            name: "Calças e Shorts Atléticos",
            description: "Design ajustável e bolsos funcionais.",
        },
        LinePiece {
            name: "Tops Esportivos",
            description: "Com suporte reforçado para atividades de alto impacto.",
        },
        LinePiece {
            name: "Jaquetas e Casacos",
            description: "Perfeitos para dias frios, com proteção contra vento e umidade.",
        },
    ],
};

/// Renders a product line's purpose, key features, and pieces.
#[component]
pub fn AboutLineTab(#[prop(default = DELTA_RUN_MUSCLE)] line: ProductLine) -> impl IntoView {
    view! {
        <section class="briefing-tab briefing-tab--line">
            <div class="briefing-tab__intro">
                <span class="briefing-tab__icon" aria-hidden="true">"ⓘ"</span>
                <div>
                    <h3>{line.title}</h3>
                    <p>{line.purpose}</p>
                </div>
            </div>

            <div class="briefing-tab__block">
                <h3>"Características Principais"</h3>
                <ul>
                    {line.features.iter().map(|feature| view! { <li>{*feature}</li> }).collect_view()}
                </ul>
            </div>

            <div class="briefing-tab__block">
                <h3>"Peças da Linha"</h3>
                <ul>
                    {line
                        .pieces
                        .iter()
                        .map(|piece| {
                            view! {
                                <li>
                                    <span class="briefing-tab__piece">{piece.name} ":"</span>
                                    " "
                                    {piece.description}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </section>
    }
}
