mod common;

use anyhow::{bail, Context, Result};
use sensibo::{AcState, Client};

use common::config_from_env;

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();
    let client = Client::with_config(config_from_env()?);
    println!("Fetching pods...");
    for pod in client
        .list_pods()
        .await
        .with_context(|| "initial pod listing failed")?
        .result
    {
        println!("{}\t{}", pod.id, pod.room_name().unwrap_or("-"));
    }

    let mut rl = rustyline::Editor::<()>::new()?;
    loop {
        let command = rl.readline(">> ")?;
        if command.is_empty() {
            break;
        };
        let parts = command.split(' ').collect::<Vec<_>>();
        let printable = match parts.as_slice() {
            ["pods"] => serde_json::to_string_pretty(&client.list_pods().await?)?,
            ["status", id] => serde_json::to_string_pretty(&client.pod_status(id).await?)?,
            ["measurements", id] => {
                serde_json::to_string_pretty(&client.pod_measurements(id).await?)?
            }
            ["set", id, rest @ ..] => {
                let target = parse_state(rest)?;
                serde_json::to_string_pretty(&client.set_pod_status(id, &target).await?)?
            }
            _ => bail!("usage: pods | status ID | measurements ID | set ID on|off [MODE] [TEMP]"),
        };
        println!("{}", printable);
    }

    Ok(())
}

fn parse_state(args: &[&str]) -> Result<AcState> {
    let mut state = AcState::default();
    match args {
        ["on", rest @ ..] => {
            state.on = true;
            if let Some(mode) = rest.first() {
                state.mode = Some(mode.parse()?);
            }
            if let Some(temp) = rest.get(1) {
                state.target_temperature =
                    Some(temp.parse().with_context(|| format!("temperature {:?}", temp))?);
            }
        }
        ["off"] => (),
        _ => bail!("expected on|off"),
    }
    Ok(state)
}
