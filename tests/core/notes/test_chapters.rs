// Chapter listing and chapter detail

use crate::common::create_test_services;
use hstc::core::types::{Language, RowKind, SourceSelector};

#[test]
fn test_list_chapters_vietnamese() {
    let (services, _dir) = create_test_services();
    let chapters = services.notes.list_chapters(Language::Vi);

    let numbers: Vec<u8> = chapters.iter().map(|c| c.chapter_number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert_eq!(chapters[0].title, "Động vật sống");
    assert!(chapters[0].has_en && chapters[0].has_sen);
    assert!(!chapters[1].has_en && chapters[1].has_sen);
    assert!(chapters[2].has_en && !chapters[2].has_sen);
}

#[test]
fn test_list_chapters_english_falls_back() {
    let (services, _dir) = create_test_services();
    let titles: Vec<String> = services
        .notes
        .list_chapters(Language::En)
        .into_iter()
        .map(|c| c.title)
        .collect();

    assert_eq!(
        titles,
        vec![
            "Live animals".to_string(),
            "Meat and edible meat offal".to_string(),
            "Cá và động vật giáp xác".to_string(),
        ]
    );
}

#[test]
fn test_list_chapters_json_shape() {
    let (services, _dir) = create_test_services();
    let json = serde_json::to_value(services.notes.list_chapters(Language::Vi)).unwrap();

    assert_eq!(json[0]["chapterNumber"], 1);
    assert_eq!(json[1]["hasEN"], false);
    assert_eq!(json[1]["hasSEN"], true);
}

#[test]
fn test_chapter_detail_both_sources() {
    let (services, _dir) = create_test_services();
    let detail = services
        .notes
        .get_chapter_detail(1, SourceSelector::Both, Language::Vi)
        .unwrap();

    assert_eq!(detail.chapter_number, 1);
    assert_eq!(detail.title.vi, "Động vật sống");
    assert_eq!(detail.title.en, "Live animals");

    let en = detail.en_notes.unwrap();
    assert_eq!(en.len(), 10);
    // Preamble rows are part of the chapter view
    assert_eq!(en[0].text, "Chương này bao gồm tất cả động vật sống");
    assert_eq!(detail.sen_notes.unwrap().len(), 6);
}

#[test]
fn test_chapter_detail_projects_language() {
    let (services, _dir) = create_test_services();
    let en = services
        .notes
        .get_chapter_detail(1, SourceSelector::En, Language::En)
        .unwrap();

    assert!(en.sen_notes.is_none());
    let rows = en.en_notes.unwrap();
    assert_eq!(rows[1].kind, RowKind::Heading);
    assert_eq!(rows[1].text, "01.01 - Live horses, asses, mules and hinnies.");
    // No English text on the last list row
    assert_eq!(rows[9].text, "Thỏ, ong, chim.");
}

#[test]
fn test_chapter_detail_both_requires_en() {
    let (services, _dir) = create_test_services();

    // Chapter 02 only has SEN notes
    let err = services
        .notes
        .get_chapter_detail(2, SourceSelector::Both, Language::Vi)
        .unwrap_err();
    assert!(err.is_not_found());

    // Chapter 03 only has EN notes; SEN is optional
    let detail = services
        .notes
        .get_chapter_detail(3, SourceSelector::Both, Language::Vi)
        .unwrap();
    assert_eq!(detail.en_notes.as_ref().map(Vec::len), Some(3));
    assert!(detail.sen_notes.is_none());

    let json = serde_json::to_value(&detail).unwrap();
    assert!(json.get("senNotes").is_none());
    assert_eq!(json["enNotes"][0]["type"], "heading");
}

#[test]
fn test_chapter_detail_sen_only_chapter() {
    let (services, _dir) = create_test_services();
    let detail = services
        .notes
        .get_chapter_detail(2, SourceSelector::Sen, Language::Vi)
        .unwrap();

    assert!(detail.en_notes.is_none());
    assert_eq!(detail.sen_notes.as_ref().map(Vec::len), Some(4));
    assert_eq!(detail.title.en, "Meat and edible meat offal");
}

#[test]
fn test_chapter_detail_missing_selected_source() {
    let (services, _dir) = create_test_services();

    let err = services
        .notes
        .get_chapter_detail(2, SourceSelector::En, Language::Vi)
        .unwrap_err();
    assert!(err.is_not_found());

    let err = services
        .notes
        .get_chapter_detail(3, SourceSelector::Sen, Language::Vi)
        .unwrap_err();
    assert!(err.is_not_found());

    let err = services
        .notes
        .get_chapter_detail(4, SourceSelector::Both, Language::Vi)
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_chapter_detail_rejects_out_of_range() {
    let (services, _dir) = create_test_services();
    for number in [0, 100, -1] {
        let err = services
            .notes
            .get_chapter_detail(number, SourceSelector::Both, Language::Vi)
            .unwrap_err();
        assert!(err.is_bad_request());
    }
}
