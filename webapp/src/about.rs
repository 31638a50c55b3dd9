use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
struct SectionHeadingProps {
    icon: String,
    title: String,
}

#[component]
fn SectionHeading(props: SectionHeadingProps) -> Element {
    rsx! {
        div { class: "section-heading",
            span { class: "icon", "aria-hidden": "true", "{props.icon}" }
            h2 { "{props.title}" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ReligionSummaryProps {
    name: String,
    accent: String,
    summary: String,
    facts: Vec<String>,
}

#[component]
fn ReligionSummary(props: ReligionSummaryProps) -> Element {
    rsx! {
        div { class: "card",
            div { class: "about-card-header {props.accent}", "{props.name}" }
            div { class: "about-card-body",
                p { "{props.summary}" }
                ul {
                    for fact in props.facts {
                        li { "{fact}" }
                    }
                }
            }
        }
    }
}

// "Contexto Jurídico"
//
// static prose about the case, no content crate involvement
#[component]
pub fn About() -> Element {
    rsx! {
        div { class: "page",
            div { class: "about-hero",
                div { class: "container narrow page-intro animate-rise",
                    span { class: "badge", "Sobre o Caso" }
                    h1 { class: "page-title", "Contexto Jurídico" }
                    p { class: "page-lead",
                        "Entenda o pano de fundo legal e as questões jurídicas envolvendo as religiões minoritárias de Novas Veredas."
                    }
                }
            }

            div { class: "container",
                div { class: "narrow",
                    section { class: "about-section animate-rise",
                        SectionHeading { icon: "⚖".to_string(), title: "O Caso".to_string() }
                        div { class: "prose",
                            p {
                                "O caso jurídico fictício de Novas Veredas envolve um conflito entre duas religiões minoritárias: a "
                                strong { "Fraternidade da Pureza Divina" }
                                " e o "
                                strong { "Círculo das Ervas Eternas" }
                                ". A tensão entre esses grupos escalou para questões legais relacionadas à liberdade religiosa, direito à prática de rituais e limites da interferência estatal em assuntos religiosos."
                            }
                            p {
                                "Este caso foi desenvolvido para uma competição de Visual Law, com o objetivo de apresentar questões jurídicas complexas de forma visualmente acessível e imersiva, facilitando a compreensão do público sobre os princípios legais envolvidos."
                            }
                        }
                    }

                    section { class: "about-section animate-rise",
                        SectionHeading { icon: "👥".to_string(), title: "As Religiões".to_string() }
                        div { class: "about-cards",
                            ReligionSummary {
                                name: "Fraternidade da Pureza Divina".to_string(),
                                accent: "accent-indigo".to_string(),
                                summary: "Seguida por cerca de 35% da população, prega a abstenção de substâncias que alterem a consciência.".to_string(),
                                facts: vec![
                                    "Liderada por Mestre Pablo Gaviria".to_string(),
                                    "Possui uma ala radical chamada \"Ordem dos Castos\"".to_string(),
                                    "Ligada ao Instituto Esperança e Luz (clínica de recuperação)".to_string(),
                                ],
                            }
                            ReligionSummary {
                                name: "Círculo das Ervas Eternas".to_string(),
                                accent: "accent-emerald".to_string(),
                                summary: "Representa 4% da população, focada na purificação das aflições humanas com chás medicinais e rituais.".to_string(),
                                facts: vec![
                                    "Liderada por Dona Toninha, matriarca e curandeira".to_string(),
                                    "Administrada pelo Coletivo dos Sete".to_string(),
                                    "Realiza cerimônias de cura com chás medicinais".to_string(),
                                ],
                            }
                        }
                    }

                    section { class: "about-section animate-rise",
                        SectionHeading { icon: "§".to_string(), title: "Questões Jurídicas".to_string() }
                        div { class: "prose",
                            p {
                                "O caso explora diversas questões jurídicas fundamentais relacionadas à liberdade religiosa e seus limites:"
                            }
                            ul {
                                li { "Até que ponto o Estado pode regular práticas religiosas?" }
                                li { "Como equilibrar a liberdade religiosa com a proteção da saúde pública?" }
                                li { "Quais os limites da coerção religiosa e proselitismo?" }
                                li { "Como proteger minorias religiosas de discriminação e perseguição?" }
                            }
                            p {
                                "Estas questões são apresentadas através de uma narrativa imersiva que permite ao público compreender os princípios jurídicos de forma mais acessível e engajadora."
                            }
                        }
                    }

                    section { class: "about-section animate-rise",
                        SectionHeading { icon: "✦".to_string(), title: "Visual Law".to_string() }
                        div { class: "prose",
                            p {
                                "Visual Law é uma abordagem que utiliza elementos visuais e design para tornar informações jurídicas mais acessíveis e compreensíveis. Este projeto demonstra como princípios de design, interatividade e narrativa podem ser aplicados para comunicar conceitos jurídicos complexos de forma eficaz."
                            }
                            p {
                                "Através de uma interface imersiva, animações sutis e uma experiência de usuário cuidadosamente projetada, este caso jurídico fictício exemplifica como a tecnologia e o design podem democratizar o acesso ao conhecimento jurídico."
                            }
                        }
                    }
                }
            }
        }
    }
}
