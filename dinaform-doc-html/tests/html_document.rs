use dinaform::{FormHost, FormScreen, RenderedForm, render};
use dinaform_doc_html::{HtmlHost, HtmlOptions, to_html, to_html_with_options};
use example_forms::{contact_form, volunteer_form};
use pretty_assertions::assert_eq;

#[test]
fn full_document_with_styles() -> anyhow::Result<()> {
    let html = to_html(&render(&volunteer_form()?));

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Cadastro de Voluntário</title>"));
    assert!(html.contains("<style>"));
    assert!(html.contains(".dinaform-form {"));
    assert!(html.trim_end().ends_with("</html>"));
    Ok(())
}

#[test]
fn sections_in_index_order() -> anyhow::Result<()> {
    let html = to_html(&render(&volunteer_form()?));

    let first = html.find("data-index=\"0\"").expect("section 0");
    let second = html.find("data-index=\"1\"").expect("section 1");
    let third = html.find("data-index=\"2\"").expect("section 2");
    assert!(first < second && second < third);
    assert_eq!(html.matches("<section ").count(), 3);
    Ok(())
}

#[test]
fn header_blocks_become_elements() -> anyhow::Result<()> {
    let html = to_html(&render(&volunteer_form()?));

    assert!(html.contains("<h2 class=\"dinaform-heading\">Dados pessoais</h2>"));
    assert!(html.contains("<p class=\"dinaform-paragraph\">Preencha seus dados de contato.</p>"));
    assert!(html.contains(
        "<img class=\"dinaform-image dinaform-center\" src=\"https://dinaforms.com.br/img/ajuda.png\" width=\"540\""
    ));
    Ok(())
}

#[test]
fn uncovered_field_is_absent() -> anyhow::Result<()> {
    let html = to_html(&render(&volunteer_form()?));

    assert!(!html.contains("orfao"));
    assert!(!html.contains("Campo sem seção"));
    assert_eq!(html.matches("class=\"dinaform-field\"").count(), 10);
    Ok(())
}

#[test]
fn unknown_kind_renders_as_text() -> anyhow::Result<()> {
    let html = to_html(&render(&volunteer_form()?));
    assert!(html.contains("type=\"text\" id=\"cpf\" name=\"cpf\""));
    Ok(())
}

#[test]
fn fragment_without_document_chrome() {
    let options = HtmlOptions::new()
        .full_document(false)
        .with_title("Fale conosco")
        .with_class_prefix("contato");
    let html = to_html_with_options(&render(&contact_form()), options);

    assert!(html.starts_with("<form class=\"contato-form\">\n  <h1 class=\"contato-title\">Fale conosco</h1>\n"));
    assert!(!html.contains("<html"));
    assert!(!html.contains("<style>"));
    assert!(html.contains("<select id=\"assunto\" name=\"assunto\" class=\"contato-select\">"));
}

#[test]
fn empty_form_is_bare() {
    let host = HtmlHost::with_options(HtmlOptions::new().full_document(false));
    let html = host
        .materialize(&RenderedForm::empty())
        .expect("html host never fails");
    assert_eq!(html, "<form class=\"dinaform-form\">\n</form>\n");
}

#[test]
fn schema_text_is_escaped() {
    let schema = r#"{
        "title": "<script>alert(1)</script>",
        "fields": [{"type": "text", "label": "\"quoted\" & <b>", "name": "x"}],
        "sections": [{"title": "<h1>a &lt; b</h1>", "from": 0, "to": 0, "index": 0}]
    }"#;
    let host = HtmlHost::new();
    let html = FormScreen::new()
        .present(Some(schema), &host)
        .expect("html host never fails");

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("placeholder=\"&quot;quoted&quot; &amp; &lt;b&gt;\""));
    assert!(html.contains("<h2 class=\"dinaform-heading\">a &lt; b</h2>"));
}

#[test]
fn date_field_keeps_day_month_year_format() -> anyhow::Result<()> {
    let html = to_html(&render(&volunteer_form()?));

    assert!(html.contains(
        "<input type=\"text\" id=\"nascimento\" name=\"nascimento\" class=\"dinaform-input\" placeholder=\"Data de nascimento\" readonly data-picker=\"date\" data-format=\"D/M/YYYY\">"
    ));
    assert!(!html.contains("type=\"date\""));
    Ok(())
}
