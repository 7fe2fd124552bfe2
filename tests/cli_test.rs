use httpmock::prelude::*;
use std::process::{Command, Output};
use std::time::Duration;

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cep-race"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run cep-race binary")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_missing_cep_prints_usage_and_exits_1() {
    let output = run_cli(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), "Use: cep-race <CEP>\n");
}

#[test]
fn test_timeout_prints_literal_and_exits_0() {
    let viacep = MockServer::start();
    let brasilapi = MockServer::start();

    viacep.mock(|when, then| {
        when.method(GET).path("/ws/01001000/json/");
        then.status(200)
            .delay(Duration::from_millis(2_000))
            .json_body(serde_json::json!({"cep": "01001-000"}));
    });
    brasilapi.mock(|when, then| {
        when.method(GET).path("/api/cep/v1/01001000");
        then.status(200)
            .delay(Duration::from_millis(2_000))
            .json_body(serde_json::json!({"cep": "01001000"}));
    });

    let viacep_url = viacep.base_url();
    let brasilapi_url = brasilapi.base_url();
    let output = run_cli(&[
        "--timeout-ms",
        "200",
        "--viacep-url",
        &viacep_url,
        "--brasilapi-url",
        &brasilapi_url,
        "01001000",
    ]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "timeout");
}

#[test]
fn test_provider_errors_print_error_line_and_exit_0() {
    let viacep = MockServer::start();
    let brasilapi = MockServer::start();

    viacep.mock(|when, then| {
        when.method(GET).path("/ws/01001000/json/");
        then.status(404);
    });
    brasilapi.mock(|when, then| {
        when.method(GET).path("/api/cep/v1/01001000");
        then.status(404);
    });

    let viacep_url = viacep.base_url();
    let brasilapi_url = brasilapi.base_url();
    let output = run_cli(&[
        "--viacep-url",
        &viacep_url,
        "--brasilapi-url",
        &brasilapi_url,
        "01001000",
    ]);

    let stdout = stdout_of(&output);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.starts_with("Error: request to "));
    assert!(stdout.contains("404 Not Found"));
    assert!(!stdout.ends_with('\n'));
}

#[test]
fn test_success_prints_six_line_report() {
    let viacep = MockServer::start();
    let brasilapi = MockServer::start();

    viacep.mock(|when, then| {
        when.method(GET).path("/ws/01001000/json/");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "cep": "01001-000",
                "logradouro": "Praça da Sé",
                "bairro": "Sé",
                "localidade": "São Paulo",
                "uf": "SP"
            }));
    });
    brasilapi.mock(|when, then| {
        when.method(GET).path("/api/cep/v1/01001000");
        then.status(200)
            .delay(Duration::from_millis(2_000))
            .json_body(serde_json::json!({"cep": "01001000"}));
    });

    let viacep_url = viacep.base_url();
    let brasilapi_url = brasilapi.base_url();
    let output = run_cli(&[
        "--viacep-url",
        &viacep_url,
        "--brasilapi-url",
        &brasilapi_url,
        "01001000",
    ]);

    let stdout = stdout_of(&output);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout.lines().count(), 6);
    assert!(stdout.starts_with("CEP ..........: 01001-000\n"));
    assert!(stdout.ends_with("API Service ..: viacep.com.br\n"));
}
