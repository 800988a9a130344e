use crate::report::{ReportContext, format_f64_6, format_signed_6};

pub fn render_report_text(ctx: &ReportContext) -> String {
    let mut out = String::new();

    out.push_str("Metastasis Risk Report\n");
    out.push_str("======================\n\n");

    out.push_str("1. Risk category\n");
    out.push_str(&format!("Category: {}\n", ctx.category_label));
    out.push_str(&format!("Probability: {}\n", format_f64_6(ctx.probability)));
    out.push_str(&format!(
        "Linear predictor: {}\n\n",
        format_signed_6(ctx.linear_predictor)
    ));

    out.push_str("2. Clinical inputs\n");
    let width = ctx.rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
    for row in &ctx.rows {
        out.push_str(&format!(
            "{:<width$}  raw={}  normalized={}\n",
            row.label,
            row.raw,
            format_f64_6(row.normalized),
            width = width
        ));
    }
    out.push('\n');

    out.push_str("3. Score drivers\n");
    for c in ctx.drivers.iter().filter(|c| c.value != 0.0) {
        out.push_str(&format!(
            "{}: {}\n",
            c.feature.short_label(),
            format_signed_6(c.value)
        ));
    }
    if ctx.drivers.iter().all(|c| c.value == 0.0) {
        out.push_str("No feature contributes to the score.\n");
    }
    out.push('\n');

    out.push_str("4. Model\n");
    out.push_str(&format!("Profile: {}\n", ctx.model_name));
    out.push_str(&format!("Bias: {}\n", format_signed_6(ctx.bias)));
    out.push_str(&format!(
        "Thresholds: high >= {}, medium >= {}\n",
        format_f64_6(ctx.thresholds.high),
        format_f64_6(ctx.thresholds.medium)
    ));
    out.push_str("Heuristic score; not a validated clinical instrument.\n");

    out
}
