use covid19_rs::CountryDirectory;
use covid19_rs::directory::{find_by_code, find_by_name};
use covid19_rs::models::CountryDirectoryEntry;
use tempfile::tempdir;

fn entry(country: &str, slug: &str, iso2: &str) -> CountryDirectoryEntry {
    CountryDirectoryEntry {
        country: country.into(),
        slug: slug.into(),
        iso2: iso2.into(),
    }
}

#[test]
fn code_lookup_scenario() {
    let dir = vec![
        entry("Chad", "chad", "TD"),
        entry("South Africa", "south-africa", "ZA"),
    ];
    assert_eq!(find_by_code("za", &dir), Some(&dir[1]));
    assert_eq!(find_by_code("zz", &dir), None);
}

#[test]
fn name_lookup_ignores_case() {
    let dir = CountryDirectory::bundled().unwrap();
    let upper = dir.find_by_name("UNITED STATES OF AMERICA");
    let lower = dir.find_by_name("united states of america");
    assert!(upper.is_some());
    assert_eq!(upper, lower);
    assert_eq!(upper.unwrap().slug, "united-states");
}

#[test]
fn name_lookup_handles_non_ascii() {
    let dir = CountryDirectory::bundled().unwrap();
    let e = dir.find_by_name("CÔTE D'IVOIRE").unwrap();
    assert_eq!(e.iso2, "CI");
}

#[test]
fn name_lookup_is_exact() {
    let dir = CountryDirectory::bundled().unwrap();
    assert!(dir.find_by_name("South").is_none());
    assert!(dir.find_by_name("  South Africa ").is_some());
}

#[test]
fn first_duplicate_wins() {
    let dir = vec![
        entry("Georgia", "georgia", "GE"),
        entry("georgia", "georgia-us", "US"),
    ];
    assert_eq!(find_by_name("GEORGIA", &dir).unwrap().slug, "georgia");
}

#[test]
fn find_tries_name_then_code() {
    let dir = CountryDirectory::bundled().unwrap();
    assert_eq!(dir.find("za").unwrap().country, "South Africa");
    assert_eq!(dir.find("south africa").unwrap().iso2, "ZA");
    assert!(dir.find("atlantis").is_none());
}

#[test]
fn bundled_directory_is_complete_enough() {
    let dir = CountryDirectory::bundled().unwrap();
    assert!(dir.len() > 200);
    assert!(
        dir.entries()
            .iter()
            .all(|e| e.iso2.len() == 2 && !e.slug.is_empty())
    );
}

#[test]
fn installed_file_takes_precedence() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("countries.json");
    std::fs::write(
        &path,
        r#"[{"Country":"Testland","Slug":"testland","ISO2":"TL"}]"#,
    )
    .unwrap();

    let dir = CountryDirectory::load_or_bundled(&path).unwrap();
    assert_eq!(dir.len(), 1);
    assert_eq!(dir.find_by_code("tl").unwrap().country, "Testland");
}

#[test]
fn missing_file_falls_back_to_bundled() {
    let tmp = tempdir().unwrap();
    let dir = CountryDirectory::load_or_bundled(tmp.path().join("countries.json")).unwrap();
    assert_eq!(dir, CountryDirectory::bundled().unwrap());
}

#[test]
fn broken_file_is_a_decode_error() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("countries.json");
    std::fs::write(&path, "not json").unwrap();
    let err = CountryDirectory::load(&path).unwrap_err();
    assert!(matches!(err, covid19_rs::CovidError::Decode(_)), "{err}");
}
