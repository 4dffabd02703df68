use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, OUTPUT_PATH, UNITS_DIR, data_rows, row};

const REQUIRED_TITLES: &[&str] = &[
    "Scratch/Move Steps",
    "Scratch/Turn Degrees",
    "Scratch/Point Direction",
    "Scratch/Go To X,Y",
    "Scratch/Set X",
    "Scratch/Change X By",
    "Scratch/Set Y",
    "Scratch/Change Y By",
    "Scratch/Repeat N",
    "Scratch/Forever",
    "Scratch/Wait Seconds",
    "Scratch/Say",
];

const MOVE_UNITS: &str = r#"using Unity.VisualScripting;

namespace FUnity.Runtime.Integrations.VisualScripting.Units.ScratchUnits
{
    [UnitTitle("Scratch/Move Steps")]
    [UnitCategory("FUnity/Scratch/動き")]
    public sealed class MoveStepsUnit : Unit
    {
        [DoNotSerialize]
        public ControlInput enter;
    }
}
"#;

#[test]
fn test_generate_without_arguments() -> Result<()> {
    let test = CliTest::new()?;
    test.write_unit("ScratchUnits/MoveUnits.cs", MOVE_UNITS)?;

    let output = test.generate()?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("Mapping file generated:"));
    assert!(stdout.contains(OUTPUT_PATH));

    let report = test.read_report()?;
    let note = format!("定義: {}/ScratchUnits/MoveUnits.cs", UNITS_DIR);
    assert!(report.starts_with("FUnity Visual Scripting 対応表（Scratch ブロック ↔ VS ノード）\n"));
    assert_eq!(
        row(&report, "Scratch/Move Steps"),
        Some(vec![
            "Scratch/Move Steps",
            "◯歩動かす",
            "MoveStepsUnit",
            note.as_str(),
        ])
    );

    Ok(())
}

#[test]
fn test_every_required_title_appears_once() -> Result<()> {
    let test = CliTest::new()?;
    test.write_unit("ScratchUnits/MoveUnits.cs", MOVE_UNITS)?;
    test.generate()?;

    let report = test.read_report()?;
    let rows = data_rows(&report);
    for title in REQUIRED_TITLES {
        let count = rows.iter().filter(|fields| fields[0] == *title).count();
        assert_eq!(count, 1, "{title}");
    }
    assert_eq!(rows.len(), REQUIRED_TITLES.len());

    Ok(())
}

#[test]
fn test_unimplemented_required_title_is_synthesized() -> Result<()> {
    let test = CliTest::new()?;
    test.generate()?;

    let report = test.read_report()?;
    assert_eq!(
        row(&report, "Scratch/Forever"),
        Some(vec![
            "Scratch/Forever",
            "ずっと",
            "(未実装)",
            "未実装: 対応する Unit が見つかりません",
        ])
    );

    let section = report
        .split("\n\n")
        .find(|section| section.contains("Scratch/Forever |"))
        .unwrap();
    assert!(section.starts_with("[制御]\n"));

    Ok(())
}

#[test]
fn test_untranslated_title_falls_back() -> Result<()> {
    let test = CliTest::new()?;
    test.write_unit(
        "FooniUnits/FooUnit.cs",
        r#"[UnitTitle("Fooni/Foo")]
public sealed class FooUnit : Unit {}
[UnitTitle("Custom/Bar")]
public sealed class BarUnit : Unit {}"#,
    )?;
    test.generate()?;

    let report = test.read_report()?;
    assert_eq!(
        row(&report, "Fooni/Foo"),
        Some(vec![
            "Fooni/Foo",
            "Fooni/Foo ※TODO: 日本語訳を確認",
            "FooUnit",
            "TODO: 日本語訳の精査が必要",
        ])
    );
    assert!(report.contains("[未分類]\n"));
    assert_eq!(row(&report, "Custom/Bar"), None);

    Ok(())
}

#[test]
fn test_later_file_overrides_duplicate_title() -> Result<()> {
    let test = CliTest::new()?;
    test.write_unit(
        "A/SayUnit.cs",
        r#"[UnitTitle("Scratch/Say")] public class SayUnitA : Unit {}"#,
    )?;
    test.write_unit(
        "B/SayUnit.cs",
        r#"[UnitTitle("Scratch/Say")] public class SayUnitB : Unit {}"#,
    )?;

    let output = test.command().arg("--verbose").output()?;
    assert!(output.status.success());

    let report = test.read_report()?;
    let say = row(&report, "Scratch/Say").unwrap();
    assert_eq!(say[2], "SayUnitB");
    assert_eq!(say[3], format!("定義: {}/B/SayUnit.cs", UNITS_DIR));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("\"Scratch/Say\" is declared more than once"));

    Ok(())
}

#[test]
fn test_unit_prefixed_base_type_keeps_its_own_title() -> Result<()> {
    let test = CliTest::new()?;
    test.write_unit(
        "AUnits.cs",
        r#"[UnitTitle("Scratch/Forever")] class ForeverUnit : UnitBase {}
[UnitTitle("Scratch/Say")] class SayUnit : Unit {}
"#,
    )?;
    test.generate()?;

    let report = test.read_report()?;
    let note = format!("定義: {}/AUnits.cs", UNITS_DIR);
    assert_eq!(
        row(&report, "Scratch/Forever"),
        Some(vec!["Scratch/Forever", "ずっと", "ForeverUnit", note.as_str()])
    );
    assert_eq!(
        row(&report, "Scratch/Say"),
        Some(vec!["Scratch/Say", "◯ と言う", "SayUnit", note.as_str()])
    );

    Ok(())
}

#[test]
fn test_output_is_deterministic_except_timestamp() -> Result<()> {
    let test = CliTest::new()?;
    test.write_unit("ScratchUnits/MoveUnits.cs", MOVE_UNITS)?;
    test.write_unit(
        "ScratchUnits/LoopUnits.cs",
        r#"[UnitTitle("Scratch/Forever")] class ForeverUnit : Unit {}
[UnitTitle("Fooni/Spin")] class SpinUnit : Unit {}"#,
    )?;

    test.generate()?;
    let first = test.read_report()?;
    test.generate()?;
    let second = test.read_report()?;

    let without_timestamp = |report: &str| -> Vec<String> {
        report
            .lines()
            .filter(|line| !line.starts_with("自動生成日時: "))
            .map(str::to_string)
            .collect()
    };
    assert_eq!(without_timestamp(&first), without_timestamp(&second));
    assert!(first.ends_with('\n') && !first.ends_with("\n\n"));

    Ok(())
}

#[test]
fn test_categories_are_contiguous() -> Result<()> {
    let test = CliTest::new()?;
    test.write_unit("ScratchUnits/MoveUnits.cs", MOVE_UNITS)?;
    test.generate()?;

    let report = test.read_report()?;
    let headers: Vec<&str> = report
        .lines()
        .filter(|line| line.starts_with('[') && line.ends_with(']'))
        .collect();

    assert_eq!(headers, vec!["[制御]", "[基本操作]", "[表示・演出]"]);

    Ok(())
}

#[test]
fn test_config_file_and_output_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".vsmaprc.json", r#"{ "unitsDir": "Units" }"#)?;
    test.write_file(
        "Units/SayUnit.cs",
        r#"[UnitTitle("Scratch/Say")] class SayUnit : Unit {}"#,
    )?;

    let output = test.command().args(["--output", "mapping.txt"]).output()?;
    assert!(output.status.success());

    let report = test.read_file("mapping.txt")?;
    assert_eq!(row(&report, "Scratch/Say").unwrap()[2], "SayUnit");
    assert!(!test.root().join(OUTPUT_PATH).exists());

    Ok(())
}

#[test]
fn test_missing_units_dir_warns() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.generate()?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("warning: Units directory does not exist"));
    assert!(test.root().join(OUTPUT_PATH).exists());

    Ok(())
}

#[test]
fn test_unreadable_definition_file_fails() -> Result<()> {
    let test = CliTest::new()?;
    let path = test.root().join(UNITS_DIR).join("BrokenUnit.cs");
    std::fs::create_dir_all(path.parent().unwrap())?;
    std::fs::write(&path, [0xff, 0xfe, 0xfd])?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
    assert!(!test.root().join(OUTPUT_PATH).exists());

    Ok(())
}

#[test]
fn test_invalid_config_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".vsmaprc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid glob pattern"));

    Ok(())
}
