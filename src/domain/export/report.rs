//! Human-readable report and the JSON download.

use std::fmt::Write;

use super::snapshot::SessionSnapshot;

/// File name of the Markdown report download.
pub const REPORT_FILE_NAME: &str = "insiktskarta.md";

/// File name of the JSON data download.
pub const DATA_FILE_NAME: &str = "mirror-garden.json";

/// Placeholder for a missing field.
const MISSING: &str = "—";

const FALLBACK_NAME: &str = "Vän";

const DISCLAIMER: &str = "*Den här appen är inte vård eller terapi. Om något väcker jobbiga känslor: prata med någon du litar på eller sök stöd.*";

/// Renders the Markdown insight map for a snapshot.
pub fn render_markdown(snapshot: &SessionSnapshot) -> String {
    let answers = snapshot.answers();
    let scores = snapshot.scores();
    let name = snapshot.profile().display_name().unwrap_or(FALLBACK_NAME);

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "# MirrorGarden — Din insiktskarta\n");
    let _ = writeln!(
        out,
        "Hej {}, här är en sammanfattning av din resa i appen.\n",
        name
    );

    out.push_str("## Huvudpoänger\n");
    let highlights = [
        ("Gränser (självrespekt)", scores.boundaries),
        ("Trygghet i närhet", scores.security),
        ("Oro/Anknytning", scores.anxiety),
        ("Avstånd/Undvikande", scores.avoidance),
        ("Ambivalens/Rädsla", scores.ambivalence),
    ];
    for (label, value) in highlights {
        let _ = writeln!(out, "- {}: **{:.1}/10**", label, value);
    }

    out.push_str("\n## Dina toppvärden\n");
    let values = answers.top_values();
    if values.is_empty() {
        out.push_str(MISSING);
    } else {
        out.push_str(&values.join(", "));
    }

    out.push_str("\n\n## Din trygghetskit\n");
    out.push_str(&bullets(answers.soothing_kit().iter().map(String::as_str)));

    out.push_str("\n\n## Din livslinje (nedslag)\n");
    out.push_str(&bullets(
        answers.timeline().into_iter().filter(|p| !p.trim().is_empty()),
    ));

    out.push_str("\n\n## Brev till mig själv\n");
    let letter = answers.self_letter().trim();
    out.push_str(if letter.is_empty() { MISSING } else { letter });

    out.push_str("\n\n---\n");
    out.push_str(DISCLAIMER);
    out.push('\n');
    out
}

/// Renders the snapshot as pretty JSON with two-space indentation.
pub fn render_json(snapshot: &SessionSnapshot) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(snapshot)
}

fn bullets<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let lines: Vec<String> = items.map(|item| format!("- {}", item)).collect();
    if lines.is_empty() {
        MISSING.to_string()
    } else {
        lines.join("\n")
    }
}
