use yew::prelude::*;

struct Milestone {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

const MILESTONES: &[Milestone] = &[
    Milestone {
        title: "Private Pilot License (PPL)",
        description: "Your foundation. Learn to fly for personal recreation and transportation. Minimum 40 flight hours required, most students complete in 50-60 hours.",
        icon: "✈",
    },
    Milestone {
        title: "Instrument Rating (IFR)",
        description: "Fly in clouds and low visibility. Required for commercial operations and airline careers. Add 40-50 hours of instrument time.",
        icon: "☁",
    },
    Milestone {
        title: "Commercial Pilot License (CPL)",
        description: "Get paid to fly. Required for any professional pilot position. Build to 250 total hours with advanced maneuvers and cross-country experience.",
        icon: "◎",
    },
    Milestone {
        title: "Certified Flight Instructor (CFI) (CFII)",
        description: "Build hours while getting paid to teach. Most airlines require 1,500 hours. Instructing is the fastest way to build time.",
        icon: "🎓",
    },
];

/// Border classes for cell `index` of a grid that is one column on phones
/// and two columns wide from 768px, so shared edges are drawn once.
pub fn cell_borders(index: usize, len: usize) -> Vec<&'static str> {
    let mut classes = vec!["border-left", "border-top", "md-border-right"];
    if index + 1 == len {
        classes.push("border-bottom-narrow");
    }
    if index % 2 == 0 {
        classes.push("md-border-left");
    }
    if index < 2 {
        classes.push("md-border-bottom");
    }
    classes
}

/// The top row glows upward on hover, the bottom row downward.
fn glow_class(index: usize) -> &'static str {
    if index < 2 {
        "glow-up"
    } else {
        "glow-down"
    }
}

#[function_component(TrainingPathway)]
pub fn training_pathway() -> Html {
    html! {
        <div class="pathway-grid">
            { MILESTONES.iter().enumerate().map(|(index, milestone)| html! {
                <div key={milestone.title} class={classes!("pathway-cell", cell_borders(index, MILESTONES.len()))}>
                    <div class={classes!("pathway-glow", glow_class(index))}></div>
                    <div class="pathway-icon">{milestone.icon}</div>
                    <div class="pathway-title">
                        <div class="pathway-marker"></div>
                        <span>{milestone.title}</span>
                    </div>
                    <p class="pathway-description">{milestone.description}</p>
                </div>
            }).collect::<Html>() }

            <style>
                {r#"
                .pathway-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 2.5rem 0;
                    position: relative;
                    z-index: 10;
                }
                .pathway-cell {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    padding: 2.5rem 0;
                    border: 0 solid #e5e7eb;
                }
                .pathway-cell.border-left { border-left-width: 1px; }
                .pathway-cell.border-top { border-top-width: 1px; }
                .pathway-cell.border-bottom-narrow { border-bottom-width: 1px; }
                .pathway-glow {
                    position: absolute;
                    inset: 0;
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.2s ease;
                }
                .pathway-glow.glow-up {
                    background: linear-gradient(to top, #eff6ff, transparent);
                }
                .pathway-glow.glow-down {
                    background: linear-gradient(to bottom, #eff6ff, transparent);
                }
                .pathway-cell:hover .pathway-glow {
                    opacity: 1;
                }
                .pathway-icon {
                    position: relative;
                    z-index: 10;
                    padding: 0 2.5rem;
                    margin-bottom: 1rem;
                    font-size: 1.5rem;
                    color: #2563eb;
                }
                .pathway-title {
                    position: relative;
                    z-index: 10;
                    padding: 0 2.5rem;
                    margin-bottom: 0.5rem;
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #1f2937;
                }
                .pathway-title span {
                    display: inline-block;
                    transition: transform 0.2s ease;
                }
                .pathway-cell:hover .pathway-title span {
                    transform: translateX(0.5rem);
                }
                .pathway-marker {
                    position: absolute;
                    left: 0;
                    top: 0;
                    width: 4px;
                    height: 1.5rem;
                    border-radius: 0 9999px 9999px 0;
                    background: #d1d5db;
                    transition: all 0.2s ease;
                }
                .pathway-cell:hover .pathway-marker {
                    height: 2rem;
                    background: #3b82f6;
                }
                .pathway-description {
                    position: relative;
                    z-index: 10;
                    padding: 0 2.5rem;
                    max-width: 20rem;
                    line-height: 1.6;
                    color: #4b5563;
                }
                @media (min-width: 768px) {
                    .pathway-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                    .pathway-cell.border-top { border-top-width: 0; }
                    .pathway-cell.border-left { border-left-width: 0; }
                    .pathway-cell.border-bottom-narrow { border-bottom-width: 0; }
                    .pathway-cell.md-border-right { border-right-width: 1px; }
                    .pathway-cell.md-border-left { border-left-width: 1px; }
                    .pathway-cell.md-border-bottom { border-bottom-width: 1px; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_column_cells_carry_the_wide_left_edge() {
        assert!(cell_borders(0, 4).contains(&"md-border-left"));
        assert!(cell_borders(2, 4).contains(&"md-border-left"));
        assert!(!cell_borders(1, 4).contains(&"md-border-left"));
    }

    #[test]
    fn only_top_row_has_the_wide_divider() {
        let with_divider: Vec<usize> = (0..4)
            .filter(|&i| cell_borders(i, 4).contains(&"md-border-bottom"))
            .collect();
        assert_eq!(with_divider, vec![0, 1]);
    }

    #[test]
    fn last_cell_closes_the_single_column() {
        assert!(cell_borders(3, MILESTONES.len()).contains(&"border-bottom-narrow"));
        assert!(!cell_borders(2, MILESTONES.len()).contains(&"border-bottom-narrow"));
    }

    #[test]
    fn rows_glow_away_from_the_middle() {
        assert_eq!(glow_class(1), "glow-up");
        assert_eq!(glow_class(3), "glow-down");
    }
}
