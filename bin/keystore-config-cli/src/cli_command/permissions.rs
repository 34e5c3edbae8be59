use crate::{cli_command::CliCommand, state::State};
use anyhow::{anyhow, Error};
use async_trait::async_trait;
use colored::Colorize;
use keystore_config::{
    capability::{EmptyPermissionsState, PermissionType},
    labels::LabelLookup,
};
use std::str::FromStr;

#[derive(Debug)]
pub struct Permissions {
    create: Option<PermissionType>,
}

#[async_trait]
impl CliCommand for Permissions {
    async fn execute(self: Box<Self>, state: &mut State) -> Result<(), Error> {
        let empty_state = EmptyPermissionsState::new(
            state.dialog.client_id(),
            state.authorization.resource_available,
            state.authorization.scope_available,
        );

        let Some(permission_type) = self.create else {
            println!("{}", state.labels.label(empty_state.title).bold());
            println!("{}", state.labels.label(empty_state.instructions));
            for affordance in &empty_state.affordances {
                let label = state.labels.label(affordance.label());
                match affordance.disablement() {
                    None => println!("  [{label}]"),
                    Some(reason) => println!(
                        "  [{}] {}",
                        label.dimmed(),
                        reason.describe(&state.labels)
                    ),
                }
            }
            return Ok(());
        };

        let affordance = empty_state
            .affordances
            .iter()
            .find(|affordance| affordance.activate() == Some(permission_type))
            .ok_or_else(|| {
                anyhow!(
                    "Cannot create a {permission_type}-based permission for {}",
                    empty_state.client_id
                )
            })?;
        println!(
            "{} for {}",
            state.labels.label(affordance.label()),
            empty_state.client_id
        );
        Ok(())
    }

    fn parse_command_args(slice: &[&str]) -> Option<Self> {
        match slice {
            [] => Some(Permissions { create: None }),
            [permission_type] => PermissionType::from_str(permission_type)
                .ok()
                .map(|permission_type| Permissions {
                    create: Some(permission_type),
                }),
            _ => None,
        }
    }

    fn format() -> &'static str {
        "permissions [resource|scope (Optional)]"
    }

    fn aliases() -> Vec<&'static str> {
        vec!["permissions", "p"]
    }

    fn description() -> &'static str {
        "Shows the create permission choices of a client without any
             permissions, or picks one. A choice is unavailable until the
             client has a resource or scope it could refer to."
    }
}
