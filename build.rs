use std::fs;
use std::path::Path;

// Optional defines forwarded from wifi_config.h as compile-time env
const OPTIONAL_DEFINES: &[&str] = &[
    "STATIC_IP",
    "STATIC_GATEWAY",
    "STATIC_NETMASK",
    "STATIC_DNS1",
    "STATIC_DNS2",
    "LOG_LEVEL",
];

fn main() -> anyhow::Result<()> {
    // Necessary for ESP-IDF
    embuild::espidf::sysenv::output();

    // Add crash log helper for better panic diagnostics
    println!("cargo:rustc-link-arg=-Wl,--undefined=esp_backtrace_print_app_description");

    let wifi_config_path = "wifi_config.h";
    println!("cargo:rerun-if-changed={}", wifi_config_path);

    if Path::new(wifi_config_path).exists() {
        let contents = fs::read_to_string(wifi_config_path)?;

        // WiFi credentials are always defined, even if empty
        for name in ["WIFI_SSID", "WIFI_PASSWORD"] {
            let value = string_define(&contents, name).unwrap_or_default();
            println!("cargo:rustc-env={}={}", name, value);
        }

        for name in OPTIONAL_DEFINES {
            if let Some(value) = string_define(&contents, name) {
                println!("cargo:rustc-env={}={}", name, value);
            }
        }
    } else {
        // Use empty defaults if no config file
        println!("cargo:rustc-env=WIFI_SSID=");
        println!("cargo:rustc-env=WIFI_PASSWORD=");
        println!("cargo:warning=wifi_config.h not found! Copy wifi_config.h.example to wifi_config.h and add your credentials.");
    }

    Ok(())
}

// Value of `#define NAME "value"`
fn string_define<'a>(contents: &'a str, name: &str) -> Option<&'a str> {
    contents
        .lines()
        .find(|line| {
            let mut parts = line.split_whitespace();
            parts.next() == Some("#define") && parts.next() == Some(name)
        })
        .and_then(|line| line.split('"').nth(1))
}
