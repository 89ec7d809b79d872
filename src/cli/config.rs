use nova::config::{NovaConfig, Persona, KNOWN_KEYS};

/// Run the config command
pub fn run_config(key: Option<&str>, value: Option<&str>) -> Result<(), String> {
    let mut config = NovaConfig::load();

    match (key, value) {
        (None, None) => {
            println!("Configuration ({}):\n", config.path().display());
            println!("  persona:   {}", config.persona().as_str());
            println!("  wake_word: {}", config.wake_word());
            println!(
                "  seed:      {}",
                config
                    .seed()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "(random)".to_string())
            );
            println!("  data_dir:  {}", config.data_dir().display());

            let extra: Vec<_> = config
                .entries()
                .filter(|(k, _)| !KNOWN_KEYS.iter().any(|(known, _)| *known == k.as_str()))
                .collect();
            if !extra.is_empty() {
                println!("\nOther keys:");
                for (k, v) in extra {
                    println!("  {}: {}", k, v);
                }
            }

            println!("\nAvailable keys:");
            for (k, description) in KNOWN_KEYS {
                println!("  {:10} {}", k, description);
            }
        }
        (Some(k), None) => match config.get(k) {
            Some(v) => println!("{}: {}", k, v),
            None => println!("{}: (not set)", k),
        },
        (Some(k), Some(v)) => {
            match k {
                "persona" => {
                    v.parse::<Persona>()?;
                }
                "seed" => {
                    v.trim()
                        .parse::<u64>()
                        .map_err(|_| format!("Seed must be a non-negative integer, got: {}", v))?;
                }
                _ => {}
            }

            config
                .set(k, v)
                .map_err(|e| format!("Failed to save: {}", e))?;
            println!("Set {} = {}", k, v);
        }
        (None, Some(_)) => {
            return Err("Key required when setting a value".to_string());
        }
    }

    Ok(())
}
