use std::fs;
use std::io::Write;
use std::time::{Duration, SystemTime};

mod common;

use anyhow::{Context, Result};
use sensibo::blocking::Client;

use common::config_from_env;

fn now() -> u128 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .expect("it's not the past")
        .as_millis()
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let pod = std::env::args()
        .nth(1)
        .context("usage: dump-measurements POD_ID")?;
    let client = Client::with_config(config_from_env()?)?;

    let unix_millis = now();
    let writer = fs::File::create(format!("measurements.{pod}.{unix_millis}.jsonl.zstd"))?;
    let mut writer = zstd::Encoder::new(writer, 9)?;
    loop {
        let measurements = client.pod_measurements(&pod)?;
        writer.write_all(format!("{} ", now()).as_bytes())?;
        serde_json::to_writer(&mut writer, &measurements)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        std::thread::sleep(Duration::from_secs(90));
    }
}
