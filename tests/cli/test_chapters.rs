//! Tests for list-chapters and get-chapter CLI commands

use crate::cli::test_helpers::{core_error, create_cli_test_services, create_empty_cli_services};
use hstc::cli::commands::chapter::{self, ChapterArgs};
use hstc::cli::commands::chapters::{self, ListChaptersArgs};
use hstc::cli::OutputFormat;
use hstc::core::types::{Language, SourceSelector};

#[tokio::test]
async fn test_list_chapters_human() {
    let (services, _temp) = create_cli_test_services();
    let args = ListChaptersArgs {
        language: Language::Vi,
        sen_only: false,
    };

    let result = chapters::execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "List should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_list_chapters_json_sen_only() {
    let (services, _temp) = create_cli_test_services();
    let args = ListChaptersArgs {
        language: Language::En,
        sen_only: true,
    };

    let result = chapters::execute(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_list_chapters_empty_corpus() {
    let services = create_empty_cli_services();
    for format in [OutputFormat::Human, OutputFormat::Json] {
        let args = ListChaptersArgs {
            language: Language::Vi,
            sen_only: false,
        };
        assert!(chapters::execute(args, &services, format).await.is_ok());
    }
}

#[tokio::test]
async fn test_get_chapter_both_formats() {
    let (services, _temp) = create_cli_test_services();
    for format in [OutputFormat::Human, OutputFormat::Json] {
        let args = ChapterArgs {
            chapter: 1,
            source: SourceSelector::Both,
            language: Language::En,
        };
        let result = chapter::execute(args, &services, format).await;
        assert!(result.is_ok(), "Get chapter failed: {:?}", result.err());
    }
}

#[tokio::test]
async fn test_get_chapter_missing_source() {
    let (services, _temp) = create_cli_test_services();
    let args = ChapterArgs {
        chapter: 3,
        source: SourceSelector::Sen,
        language: Language::Vi,
    };

    let err = chapter::execute(args, &services, OutputFormat::Human)
        .await
        .unwrap_err();
    assert!(core_error(err.as_ref()).is_not_found());
}

#[tokio::test]
async fn test_get_chapter_out_of_range() {
    let (services, _temp) = create_cli_test_services();
    let args = ChapterArgs {
        chapter: 120,
        source: SourceSelector::Both,
        language: Language::Vi,
    };

    let err = chapter::execute(args, &services, OutputFormat::Json)
        .await
        .unwrap_err();
    assert!(core_error(err.as_ref()).is_bad_request());
    assert!(err.to_string().contains("chapterNumber"));
}
