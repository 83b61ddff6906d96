// ABOUTME: Read-only projections of the concept document
// Plain-text digest for the clipboard, markdown for the file export

use crate::concept::ConceptDocument;

/// Suffix appended to the title slug for the exported file
pub const EXPORT_SUFFIX: &str = "-concept.md";

fn labeled(label: &str, value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        format!("{label}:")
    } else {
        format!("{label}: {value}")
    }
}

fn bullet(label: &str, value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        format!("- **{label}:**")
    } else {
        format!("- **{label}:** {value}")
    }
}

fn push_if_present(lines: &mut Vec<String>, line: String, value: &str) {
    if !value.trim().is_empty() {
        lines.push(line);
    }
}

/// The applied constraints as a single comma-separated list
fn constraints_list(doc: &ConceptDocument) -> String {
    let c = &doc.creative_constraints;
    let mut parts = Vec::new();
    if !c.no_screens.trim().is_empty() {
        parts.push("No screens".to_string());
    }
    if !c.mobile_concept.trim().is_empty() {
        parts.push("Mobile exhibition".to_string());
    }
    if !c.active_visitors.trim().is_empty() {
        parts.push("Active visitor participation".to_string());
    }
    if !c.custom_constraint.trim().is_empty() {
        parts.push(c.custom_constraint.trim().to_string());
    }
    parts.join(", ")
}

/// Field-labeled, blank-line separated digest of the whole concept.
///
/// Sections with no content are omitted, except the theme and the minimum
/// viable concept, which are always present (blank when unfilled). The
/// output is a pure function of the document.
pub fn plain_text(doc: &ConceptDocument) -> String {
    let mut blocks: Vec<String> = Vec::new();

    blocks.push(format!("MUSEUM CONCEPT: {}", doc.title));

    // Theme block is mandatory
    let tm = &doc.theme_matrix;
    let mut theme = vec![labeled("THEME", &tm.theme)];
    push_if_present(&mut theme, labeled("URGENT ASPECT", &tm.urgent), &tm.urgent);
    push_if_present(
        &mut theme,
        labeled("UNDEREXPOSED ASPECT", &tm.underexposed),
        &tm.underexposed,
    );
    push_if_present(
        &mut theme,
        labeled("APPEALS TO ALL AGES", &tm.appeals_to_all),
        &tm.appeals_to_all,
    );
    blocks.push(theme.join("\n"));

    let dp = &doc.design_philosophy;
    if !dp.is_empty() {
        let mut approach = match (dp.main_method, dp.supporting_method) {
            (Some(main), Some(supporting)) => {
                vec![format!("DESIGN APPROACH: {main} + {supporting}")]
            }
            (Some(main), None) => vec![format!("DESIGN APPROACH: {main}")],
            (None, Some(supporting)) => vec![format!("DESIGN APPROACH: + {supporting}")],
            (None, None) => vec!["DESIGN APPROACH:".to_string()],
        };
        push_if_present(
            &mut approach,
            labeled("DESIGN NOTES", &dp.method_description),
            &dp.method_description,
        );
        blocks.push(approach.join("\n"));
    }

    if !doc.creative_constraints.is_empty() {
        blocks.push(format!("CREATIVE CONSTRAINTS: {}", constraints_list(doc)));
    }

    let ax = &doc.artifact_experience;
    if !ax.is_empty() {
        blocks.push(format!(
            "CONCEPT TRANSFORMATION:\nFrom message: \"{}\"\nTo experience: \"{}\"",
            ax.message.trim(),
            ax.experience.trim()
        ));
    }

    // Minimum viable concept is mandatory
    let ma = &doc.modular_approach;
    let mut modular = vec![labeled("MINIMUM VIABLE CONCEPT", &ma.initial_concept)];
    push_if_present(
        &mut modular,
        labeled("TESTING PLAN", &ma.testing_plan),
        &ma.testing_plan,
    );
    push_if_present(
        &mut modular,
        labeled("SCALING IDEAS", &ma.scaling_ideas),
        &ma.scaling_ideas,
    );
    blocks.push(modular.join("\n"));

    let sl = &doc.social_layer;
    if !sl.is_empty() {
        let mut social = vec![match sl.primary_impact {
            Some(impact) => format!("SOCIAL IMPACT: {impact}"),
            None => "SOCIAL IMPACT:".to_string(),
        }];
        push_if_present(
            &mut social,
            labeled("VISITOR TAKEAWAY", &sl.takeaway),
            &sl.takeaway,
        );
        blocks.push(social.join("\n"));
    }

    blocks.join("\n\n")
}

/// Markdown rendering with one heading per wizard step, same omission
/// rules as `plain_text`.
pub fn markdown(doc: &ConceptDocument) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("# Museum Genesis Lab: {}", doc.title));
    lines.push(String::new());

    let tm = &doc.theme_matrix;
    lines.push("## Theme Matrix".to_string());
    lines.push(bullet("Theme", &tm.theme));
    push_if_present(&mut lines, bullet("What's urgent", &tm.urgent), &tm.urgent);
    push_if_present(
        &mut lines,
        bullet("What's underexposed", &tm.underexposed),
        &tm.underexposed,
    );
    push_if_present(
        &mut lines,
        bullet("Appeals to all ages", &tm.appeals_to_all),
        &tm.appeals_to_all,
    );
    lines.push(String::new());

    let dp = &doc.design_philosophy;
    if !dp.is_empty() {
        lines.push("## Design Philosophy".to_string());
        lines.push(format!(
            "- **Main method:** {}",
            dp.main_method
                .map(|m| m.title())
                .unwrap_or("Not specified")
        ));
        if let Some(supporting) = dp.supporting_method {
            lines.push(format!("- **Supporting method:** {}", supporting.title()));
        }
        push_if_present(
            &mut lines,
            bullet("Approach details", &dp.method_description),
            &dp.method_description,
        );
        lines.push(String::new());
    }

    if !doc.creative_constraints.is_empty() {
        lines.push("## Creative Constraints".to_string());
        lines.push(format!(
            "- **Applied constraints:** {}",
            constraints_list(doc)
        ));
        lines.push(String::new());
    }

    let ax = &doc.artifact_experience;
    if !ax.is_empty() {
        lines.push("## From Message to Experience".to_string());
        lines.push(format!(
            "- **Message:** {}",
            if ax.message.trim().is_empty() {
                "Not specified"
            } else {
                ax.message.trim()
            }
        ));
        lines.push(format!(
            "- **Experience:** {}",
            if ax.experience.trim().is_empty() {
                "Not specified"
            } else {
                ax.experience.trim()
            }
        ));
        lines.push(String::new());
    }

    let ma = &doc.modular_approach;
    lines.push("## Modular Implementation".to_string());
    lines.push(bullet("Minimum viable concept", &ma.initial_concept));
    push_if_present(
        &mut lines,
        bullet("Testing approach", &ma.testing_plan),
        &ma.testing_plan,
    );
    push_if_present(
        &mut lines,
        bullet("Scaling potential", &ma.scaling_ideas),
        &ma.scaling_ideas,
    );
    lines.push(String::new());

    let sl = &doc.social_layer;
    if !sl.is_empty() {
        lines.push("## Social Layer".to_string());
        lines.push(format!(
            "- **Primary impact:** {}",
            sl.primary_impact
                .map(|i| i.title())
                .unwrap_or("Not specified")
        ));
        push_if_present(
            &mut lines,
            bullet("Visitor takeaway", &sl.takeaway),
            &sl.takeaway,
        );
        lines.push(String::new());
    }

    lines.push("---".to_string());
    lines.push("Created with Museum Genesis Lab".to_string());
    lines.push(String::new());

    lines.join("\n")
}

/// Title slug used for the export filename: lowercase, whitespace runs
/// collapsed to single hyphens.
pub fn slug(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Filename the markdown export is offered under
pub fn export_file_name(title: &str) -> String {
    format!("{}{}", slug(title), EXPORT_SUFFIX)
}
