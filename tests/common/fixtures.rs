// Test fixtures for integration testing

use hstc::core::corpus::{CHAPTERS_FILE, EN_NOTES_FILE, SEN_NOTES_FILE};
use hstc::core::types::{Chapter, ChapterIndexEntry, Row, RowKind};
use std::path::Path;
use tempfile::TempDir;

/// Sample note corpus covering the segmentation edge cases
///
/// - Chapter 01: EN and SEN. EN has a preamble row, a codeless heading
///   inside 01.01 and a list row without English text.
/// - Chapter 02: SEN only. One heading row declares 0202 and 0206.
/// - Chapter 03: EN only. A heading mentioning only the chapter number
///   stays in the preamble.
#[allow(dead_code)] // Used in integration tests
pub struct NoteCorpus {
    pub index: Vec<ChapterIndexEntry>,
    pub en: Vec<Chapter>,
    pub sen: Vec<Chapter>,
}

fn row(kind: RowKind, vi: &str, en: &str) -> Row {
    Row::new(kind, vi, en)
}

fn chapter(n: u8, title_vi: &str, title_en: &str, rows: Vec<Row>) -> Chapter {
    Chapter {
        chapter_number: n,
        title_vi: title_vi.to_string(),
        title_en: title_en.to_string(),
        rows,
    }
}

fn entry(n: u8, title_vi: &str, title_en: &str, has_en: bool, has_sen: bool) -> ChapterIndexEntry {
    ChapterIndexEntry {
        chapter_number: n,
        title_vi: title_vi.to_string(),
        title_en: title_en.to_string(),
        has_en,
        has_sen,
    }
}

#[allow(dead_code)] // Used in integration tests
impl NoteCorpus {
    pub fn sample() -> Self {
        use RowKind::{Heading, List, Paragraph};

        let index = vec![
            entry(1, "Động vật sống", "Live animals", true, true),
            entry(
                2,
                "Thịt và phụ phẩm dạng thịt ăn được sau giết mổ",
                "Meat and edible meat offal",
                false,
                true,
            ),
            entry(3, "Cá và động vật giáp xác", "", true, false),
        ];

        let en = vec![
            chapter(
                1,
                "Động vật sống",
                "Live animals",
                vec![
                    row(Paragraph, "Chương này bao gồm tất cả động vật sống", "This chapter covers all live animals"),
                    row(Heading, "01.01 - Ngựa, lừa, la sống.", "01.01 - Live horses, asses, mules and hinnies."),
                    row(Paragraph, "Nhóm này bao gồm ngựa, lừa và la sống.", "This heading covers live horses, asses and mules."),
                    row(List, "(a) Ngựa giống thuần chủng.", "(a) Pure-bred breeding horses."),
                    row(Heading, "Các loại khác", "Other"),
                    row(Paragraph, "Ngựa đua và ngựa kéo xe.", "Racing horses and draught horses."),
                    row(Heading, "01.02 - Động vật sống họ trâu bò.", "01.02 - Live bovine animals."),
                    row(Paragraph, "Bao gồm bò sữa và bò thịt.", "Includes dairy and beef cattle."),
                    row(Heading, "01.06 - Động vật sống khác.", "01.06 - Other live animals."),
                    row(List, "Thỏ, ong, chim.", ""),
                ],
            ),
            chapter(
                3,
                "Cá và động vật giáp xác",
                "",
                vec![
                    row(Heading, "Chú giải chương 03", "Chapter 03 notes"),
                    row(Heading, "03.01 - Cá sống.", "03.01 - Live fish."),
                    row(Paragraph, "Cá cảnh.", "Ornamental fish."),
                ],
            ),
        ];

        let sen = vec![
            chapter(
                1,
                "Động vật sống",
                "",
                vec![
                    row(Heading, "0101.21.00 - Ngựa thuần chủng để nhân giống", ""),
                    row(Paragraph, "Phải có giấy chứng nhận phả hệ.", "A pedigree certificate is required."),
                    row(Heading, "0101.29 - Loại khác", ""),
                    row(Paragraph, "Ngựa đua có lông bờm dài.", ""),
                    row(Heading, "0102.21.00 và 0102.29 - Bò", ""),
                    row(Paragraph, "Bò sữa giống.", ""),
                ],
            ),
            chapter(
                2,
                "Thịt và phụ phẩm dạng thịt ăn được sau giết mổ",
                "Meat and edible meat offal",
                vec![
                    row(Heading, "0201 - Thịt trâu bò, tươi hoặc ướp lạnh", ""),
                    row(Paragraph, "Thịt tươi nguyên con.", ""),
                    row(Heading, "0202, 0206 - Thịt trâu bò đông lạnh; phụ phẩm", ""),
                    row(Paragraph, "Thịt đông lạnh đóng gói.", ""),
                ],
            ),
        ];

        Self { index, en, sen }
    }

    /// Write the three JSON tables into `dir`
    pub fn write_to(&self, dir: &Path) {
        std::fs::write(
            dir.join(CHAPTERS_FILE),
            serde_json::to_string_pretty(&self.index).unwrap(),
        )
        .unwrap();
        std::fs::write(
            dir.join(EN_NOTES_FILE),
            serde_json::to_string_pretty(&self.en).unwrap(),
        )
        .unwrap();
        std::fs::write(
            dir.join(SEN_NOTES_FILE),
            serde_json::to_string_pretty(&self.sen).unwrap(),
        )
        .unwrap();
    }

    /// Write the corpus into a fresh temporary directory
    pub fn into_temp_dir(self) -> TempDir {
        let dir = TempDir::new().unwrap();
        self.write_to(dir.path());
        dir
    }
}
