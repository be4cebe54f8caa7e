use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

const DRIVERS: &str = "HAM,Mercedes,44,Lewis Hamilton\n\
                       VER,Red Bull,1,Max Verstappen\n\
                       LEC,Ferrari,16,Charles Leclerc\n";

fn timing_board(dir: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_timing_board"))
        .current_dir(dir)
        .args(args)
        .env("LOGGING_LEVEL", "OFF")
        .env_remove("TIMING_OUTPUT_DIR")
        .env_remove("TIMING_BATCH")
        .env_remove("TIMING_PLOT")
        .env_remove("TIMING_PLOT_DIR")
        .env_remove("TIMING_LOG_FILE")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn write_fixtures(dir: &Path) {
    fs::write(dir.join("drivers.txt"), DRIVERS).unwrap();
    fs::write(
        dir.join("york.txt"),
        "York\nHAM90.5\nVER89.25\nLEC91.0\nHAM89.75\nVER89.5\nLEC90.0\n",
    )
    .unwrap();
    fs::write(dir.join("monza.txt"), "Monza Sprint\nLEC 80.5\nHAM 81.0\n").unwrap();
}

#[test]
fn batch_run_writes_one_csv_per_race() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());

    let output = timing_board(
        dir.path(),
        &["--batch", "-o", "results", "drivers.txt", "york.txt", "monza.txt"],
        "",
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Processing file: york.txt"));
    assert!(stdout.contains("Overall Fastest Lap: VER - 89.250"));
    assert!(stdout.contains("Overall Fastest Lap: LEC - 80.500"));

    let york = fs::read_to_string(dir.path().join("results/york.csv")).unwrap();
    let lines: Vec<&str> = york.lines().collect();
    assert_eq!(lines[0], "York");
    assert_eq!(
        lines[1],
        "Driver ID,Full Name,Team,Car Number,Fastest Lap,Average Lap,Total Laps"
    );
    let codes: Vec<&str> = lines[2..]
        .iter()
        .map(|l| l.split(',').next().unwrap())
        .collect();
    assert_eq!(codes, vec!["VER", "HAM", "LEC"]);

    let ver: Vec<&str> = lines[2].split(',').collect();
    assert_eq!(ver[4].parse::<f64>().unwrap(), 89.25);
    assert_eq!(ver[5].parse::<f64>().unwrap(), 89.375);
    assert_eq!(ver[6], "2");

    assert!(dir.path().join("results/monza_sprint_results.csv").exists());
}

#[test]
fn interactive_lookup_reprompts_on_unknown_code() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());

    let output = timing_board(dir.path(), &["drivers.txt", "york.txt"], "NOR\nham\nno\n\n");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Error: Driver with code 'NOR' not found in the lap data."));
    assert!(stdout.contains("Please enter a valid driver code: "));
    assert!(stdout.contains("Statistics for Driver: HAM"));
    assert!(stdout.contains("Average Lap: 90.125"));
    assert!(dir.path().join("york.csv").exists());
}

#[test]
fn missing_race_file_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());

    let output = timing_board(dir.path(), &["--batch", "drivers.txt", "silverstone.txt"], "");
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: File 'silverstone.txt' not found."));
    let csv_files = fs::read_dir(dir.path())
        .unwrap()
        .filter(|e| {
            e.as_ref()
                .unwrap()
                .path()
                .extension()
                .is_some_and(|ext| ext == "csv")
        })
        .count();
    assert_eq!(csv_files, 0);
}

#[test]
fn missing_driver_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());

    let output = timing_board(dir.path(), &["--batch", "nobody.txt", "york.txt"], "");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));
    assert!(!dir.path().join("york.csv").exists());
}

#[test]
fn unknown_lap_driver_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    fs::write(dir.path().join("york.txt"), "York\nHAM90.5\nNOR89.0\n").unwrap();

    let output = timing_board(dir.path(), &["--batch", "drivers.txt", "york.txt"], "");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("'NOR'"));
    assert!(!dir.path().join("york.csv").exists());
}

#[test]
fn too_few_arguments_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());

    let output = timing_board(dir.path(), &["drivers.txt"], "");
    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
}
