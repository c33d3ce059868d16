//! Render the bundled volunteer form as an HTML document.
//!
//! Run with: cargo run -p dinaform-doc-html --example render_volunteer
//! Set `RUST_LOG=dinaform=debug` to see how fields are assigned to sections.

use dinaform::{FormHost, FormScreen};
use dinaform_doc_html::{HtmlHost, HtmlOptions};
use example_forms::VOLUNTEER_JSON;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let form = FormScreen::new().render_source(Some(VOLUNTEER_JSON));
    let host = HtmlHost::with_options(HtmlOptions::new().with_class_prefix("voluntario"));
    let html = host.materialize(&form)?;

    std::fs::write("volunteer_form.html", &html)?;

    println!("Generated volunteer_form.html");
    Ok(())
}
