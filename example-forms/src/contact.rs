use dinaform::{FieldSpec, FormSchema, OptionSpec, SectionSpec};

/// A two-section contact form built in code.
pub fn contact_form() -> FormSchema {
    FormSchema::new(
        "Contato",
        vec![
            FieldSpec::new("text", "Nome")
                .with_name("nome")
                .with_uuid("c-1")
                .required(),
            FieldSpec::new("email", "E-mail").with_name("email").with_uuid("c-2"),
            FieldSpec::new("dropdown", "Assunto")
                .with_name("assunto")
                .with_uuid("c-3")
                .required()
                .with_options(vec![
                    OptionSpec::new("Dúvida", "duvida"),
                    OptionSpec::new("Sugestão", "sugestao"),
                ]),
            FieldSpec::new("description", "Mensagem")
                .with_name("mensagem")
                .with_uuid("c-4"),
        ],
        vec![
            SectionSpec::new("<h1>Quem é você?</h1>", 0, 1, 0).with_uuid("cs-1"),
            SectionSpec::new("<h1>Mensagem</h1><p>Escreva abaixo.</p>", 2, 3, 1).with_uuid("cs-2"),
        ],
    )
}
