use crate::{cli_command::CliCommand, state::State};
use anyhow::Error;
use async_trait::async_trait;
use colored::Colorize;
use keystore_config::{
    constants::labels, infrastructure::sensitive_info::REDACTED_INFO_LABEL, labels::LabelLookup,
    Field, KeyConfigurationForm,
};

#[derive(Debug)]
pub struct Status {}

/// Text shown for the current value of `field`. Secrets are never shown.
fn field_value(form: &KeyConfigurationForm, field: Field) -> String {
    match field {
        Field::Format => form
            .format()
            .map_or_else(|| "<none>".to_string(), ToString::to_string),
        Field::ImportFile => form.file_import().selection().map_or_else(
            || "<none>".to_string(),
            |file| format!("{} ({} bytes)", file.filename(), file.content().len()),
        ),
        Field::KeyAlias => form.key_alias().to_string(),
        Field::KeyPassword | Field::StorePassword if form.has_value(field) => {
            REDACTED_INFO_LABEL.to_string()
        }
        Field::KeyPassword | Field::StorePassword => "<empty>".to_string(),
        Field::RealmCertificate if form.realm_certificate() => "on".to_string(),
        Field::RealmCertificate => "off".to_string(),
    }
}

#[async_trait]
impl CliCommand for Status {
    async fn execute(self: Box<Self>, state: &mut State) -> Result<(), Error> {
        let form = state.form()?;

        for field in form.visible_fields().iter() {
            let required = if field.is_required() { " *" } else { "" };
            println!(
                "{}{}: {}",
                state.labels.label(field.label_key()).bold(),
                required,
                field_value(form, field)
            );
        }

        let Some(submit) = state.dialog.submit_control() else {
            return Ok(());
        };
        let generate = state.labels.label(labels::GENERATE);
        match submit.disabled_by() {
            None => println!("[{generate}] enabled"),
            Some(reason) => println!(
                "[{generate}] disabled: {}",
                reason.describe(&state.labels)
            ),
        }
        Ok(())
    }

    fn parse_command_args(slice: &[&str]) -> Option<Self> {
        match slice {
            [] => Some(Status {}),
            _ => None,
        }
    }

    fn format() -> &'static str {
        "status"
    }

    fn aliases() -> Vec<&'static str> {
        vec!["status", "s"]
    }

    fn description() -> &'static str {
        "Prints the fields relevant for the selected format, their values
             and whether the configuration can be generated. Required
             fields are marked with *."
    }
}
