//! Line-oriented plain-text rendering of a document report.

use std::fmt::Write;

use shared_types::DocumentReport;

const ALL_PRESENT_MESSAGE: &str =
    "Hurmatli doktorant, ilmiy ish bo'yicha barcha mezonlar mavjud!";
const MISSING_MESSAGE: &str = "Hurmatli doktorant, sizda ushbu mezon(lar) bo'yicha ilmiy ish \
     dissertatsiyada mavjud emas, bartaraf etib qayta urinib ko'ring!";

/// Render the report in the layout of the exported analysis document:
/// title, heading-status block, optional Introduction checklist block,
/// statistics block.
pub fn render_report(report: &DocumentReport) -> String {
    let mut out = String::new();
    let analysis = &report.report;

    // Infallible: fmt::Write on String never errors.
    let _ = writeln!(out, "Dissertatsiya Tekshiruvi Natijalari");
    let _ = writeln!(out);

    let _ = writeln!(out, "Kalit so'zlar holati:");
    if analysis.headings.missing.is_empty() {
        let _ = writeln!(out, "{ALL_PRESENT_MESSAGE}");
    } else {
        let _ = writeln!(out, "{MISSING_MESSAGE}");
    }
    for heading in &analysis.headings.found {
        let _ = writeln!(out, "[+] {heading} - mavjud");
        if heading == "XULOSA" {
            if let Some(excerpt) = &analysis.headings.conclusion_excerpt {
                let _ = writeln!(out, "    Xulosa: {excerpt}");
            }
        }
    }
    for heading in &analysis.headings.missing {
        let _ = writeln!(out, "[-] {heading} - mavjud emas");
    }

    if let Some(intro) = &analysis.introduction {
        let _ = writeln!(out);
        let _ = writeln!(out, "Kirish qismi tahlili:");
        let _ = writeln!(out, "{}", intro.verdict.assessment());
        let _ = writeln!(out, "To'liqlik darajasi: {}%", intro.completion_percent);
        let _ = writeln!(
            out,
            "Topilgan bo'limlar: {}/{}",
            intro.found_count, intro.total_count
        );
        for item in &intro.results {
            let marker = if item.found { "[+]" } else { "[-]" };
            let _ = writeln!(out, "  {marker} {}", item.name);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Dissertatsiya haqida umumiy ma'lumot:");
    let _ = writeln!(out, "So'zlar soni: {}", analysis.stats.word_count);
    let _ = writeln!(out, "Belgilar soni: {}", analysis.stats.char_count);
    let _ = writeln!(
        out,
        "Topilgan kalit so'zlar soni: {}/{}",
        analysis.stats.heading_count, analysis.stats.total_headings
    );
    let _ = writeln!(
        out,
        "To'liqlik darajasi: {}%",
        analysis.stats.completion_percent
    );
    let _ = writeln!(
        out,
        "Dissertatsiya mazmuni: {}",
        analysis.stats.content_excerpt
    );

    out
}
