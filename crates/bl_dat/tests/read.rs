//! Integration tests decoding a synthetic itemcolorstrings.dat file built
//! in memory, covering every bit-packed structure the format uses.

use bl_dat::error::{Error, Result};
use bl_dat::ObjectNameCatalog;
use tracing_test::traced_test;

/// Packs values least-significant-bit-first, matching the file's bit order.
struct BitWriter {
    buf: Vec<u8>,
    bit: usize,
}

impl BitWriter {
    fn new() -> Self {
        BitWriter {
            buf: Vec::new(),
            bit: 0,
        }
    }

    fn push(&mut self, value: u32, bit_length: usize) {
        for i in 0..bit_length {
            let byte = self.bit / 8;
            if byte == self.buf.len() {
                self.buf.push(0);
            }
            if value >> i & 1 == 1 {
                self.buf[byte] |= 1 << (self.bit % 8);
            }
            self.bit += 1;
        }
    }

    fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Write one tagged variable-length field, picking the smallest shape that
/// fits. The two 3-bit shapes share their data's low bit with the tag's high
/// bit, so the tag comes out as 0 or 2 depending on the value's parity.
fn push_field(writer: &mut BitWriter, value: u32) {
    if value < 8 {
        writer.push(value << 1, 4);
    } else if value < 64 {
        writer.push(0b01 | value << 2, 8);
    } else {
        writer.push(0b11 | value << 2, 12);
    }
}

fn latin1(s: &str) -> Vec<u8> {
    s.chars().map(|c| c as u8).collect()
}

/// Append a complete string table to `file` and return its absolute offset.
/// Uses 16-bit encoding index and word index entries throughout.
fn append_string_table(file: &mut Vec<u8>, entries: &[Vec<usize>], words: &[&str]) -> u32 {
    let base = file.len();
    let count = entries.len();

    // Per-entry encoding blobs, each starting on its own byte.
    let mut blob_offsets = Vec::with_capacity(count);
    let mut blobs = Vec::new();
    for entry in entries {
        blob_offsets.push(blobs.len() as u16);
        let mut writer = BitWriter::new();
        push_field(&mut writer, entry.len() as u32);
        for &word_index in entry {
            push_field(&mut writer, word_index as u32);
        }
        blobs.extend(writer.into_bytes());
    }

    let encodings_offset = base + 13 + 2 * count;
    let word_index_offset = encodings_offset + blobs.len();
    let words_offset = word_index_offset + 1 + 2 * (words.len() + 1);

    file.extend((encodings_offset as u32).to_le_bytes());
    file.extend((word_index_offset as u32).to_le_bytes());
    file.extend((words_offset as u32).to_le_bytes());
    file.push(16);

    for offset in &blob_offsets {
        file.extend(offset.to_le_bytes());
    }
    file.extend(&blobs);

    file.push(16);
    let mut offset = 0u16;
    for word in words {
        file.extend(offset.to_le_bytes());
        offset += word.chars().count() as u16;
    }
    file.extend(offset.to_le_bytes());

    for word in words {
        file.extend(latin1(word));
    }

    base as u32
}

const ITEMS: [(u16, u8); 4] = [(100, 0), (205, 3), (300, 1), (301, 3)];

fn item_words() -> Vec<String> {
    let mut words: Vec<String> = (0..70).map(|i| format!("Filler{:02}", i)).collect();
    words[0] = "Ancient".to_owned();
    words[1] = "Stone".to_owned();
    words[2] = "Chisel".to_owned();
    words[3] = "Décor".to_owned();
    words[4] = "Gleam".to_owned();
    words[5] = "Lantern".to_owned();
    words[65] = "Obsidian".to_owned();
    words
}

/// Build a whole catalog file: four items, two metals, two languages that
/// share one translation block.
fn sample_file() -> Vec<u8> {
    let mut file = Vec::new();

    let languages = ["english", "french"];
    let header_len: usize = 1
        + 2
        + 3 * ITEMS.len()
        + 1
        + languages.iter().map(|l| 1 + l.len() + 4).sum::<usize>();
    let translation_offset = header_len as u32;

    file.push(2); // metal count
    file.extend((ITEMS.len() as u16).to_le_bytes());
    for (id, subtitle_index) in ITEMS {
        file.extend(id.to_le_bytes());
        file.push(subtitle_index);
    }
    file.push(languages.len() as u8);
    for language in languages {
        file.push(language.len() as u8);
        file.extend(language.as_bytes());
        file.extend(translation_offset.to_le_bytes());
    }
    assert_eq!(file.len(), header_len);

    // Translation block: three table offsets, then the subtitle table.
    let block = file.len();
    file.extend([0u8; 12]);

    let subtitle_entries = vec![vec![], vec![0, 1], vec![2], vec![3]];
    let subtitle_words = ["Smart", "Stack", "Totem", "Tool"];
    let subtitle_offset = append_string_table(&mut file, &subtitle_entries, &subtitle_words);
    assert_eq!(subtitle_offset as usize, block + 12);

    let colour_entries: Vec<Vec<usize>> = (0..255).map(|i| vec![i % 2]).collect();
    let colour_offset = append_string_table(&mut file, &colour_entries, &["Black", "White"]);

    let metal_entries = vec![vec![0], vec![1]];
    let metal_offset = append_string_table(&mut file, &metal_entries, &["Copper", "Iron"]);

    let item_entries = vec![vec![1, 2], vec![0, 4, 5], vec![65], vec![3]];
    let item_words = item_words();
    let item_words: Vec<&str> = item_words.iter().map(String::as_str).collect();
    let item_offset = append_string_table(&mut file, &item_entries, &item_words);

    file[block..block + 4].copy_from_slice(&colour_offset.to_le_bytes());
    file[block + 4..block + 8].copy_from_slice(&metal_offset.to_le_bytes());
    file[block + 8..block + 12].copy_from_slice(&item_offset.to_le_bytes());

    file
}

#[traced_test]
#[test]
fn derives_counts_from_header() -> Result<()> {
    let catalog = ObjectNameCatalog::new(sample_file().as_slice())?;
    let counts = catalog.counts();

    assert_eq!(counts.metals, 2);
    assert_eq!(counts.items, 4);
    assert_eq!(counts.languages, 2);
    assert_eq!(counts.colours, 255);
    // Subtitle indices {0, 3, 1, 3}: largest is 3, index 0 counts too.
    assert_eq!(counts.subtitles, 4);

    Ok(())
}

#[traced_test]
#[test]
fn reads_item_records() -> Result<()> {
    let catalog = ObjectNameCatalog::new(sample_file().as_slice())?;

    assert_eq!(catalog.item_count(), 4);
    assert_eq!(catalog.item(1)?.id, 205);
    assert_eq!(catalog.item(1)?.subtitle_index, 3);
    assert!(matches!(
        catalog.item(4),
        Err(Error::IndexOutOfRange { index: 4, count: 4 })
    ));

    let mut languages: Vec<&str> = catalog.languages().collect();
    languages.sort_unstable();
    assert_eq!(languages, ["english", "french"]);

    Ok(())
}

#[traced_test]
#[test]
fn decodes_item_names() -> Result<()> {
    let catalog = ObjectNameCatalog::new(sample_file().as_slice())?;
    let english = catalog.translation("english")?;

    assert_eq!(english.item(0)?, "Stone Chisel");
    assert_eq!(english.item(1)?, "Ancient Gleam Lantern");
    assert_eq!(english.item(2)?, "Obsidian");
    assert_eq!(english.item(3)?, "Décor");

    Ok(())
}

#[traced_test]
#[test]
fn decodes_subtitles_including_empty() -> Result<()> {
    let catalog = ObjectNameCatalog::new(sample_file().as_slice())?;
    let english = catalog.translation("english")?;

    assert_eq!(english.subtitle(0)?, "");
    assert_eq!(english.subtitle(1)?, "Smart Stack");
    assert_eq!(english.subtitle(2)?, "Totem");
    assert_eq!(english.subtitle(3)?, "Tool");

    Ok(())
}

#[traced_test]
#[test]
fn decodes_colours_and_metals() -> Result<()> {
    let catalog = ObjectNameCatalog::new(sample_file().as_slice())?;
    let english = catalog.translation("english")?;

    assert_eq!(english.colours().len(), 255);
    assert_eq!(english.colour(0)?, "Black");
    assert_eq!(english.colour(1)?, "White");
    assert_eq!(english.colour(254)?, "Black");

    assert_eq!(english.metal(0)?, "Copper");
    assert_eq!(english.metal(1)?, "Iron");

    Ok(())
}

#[traced_test]
#[test]
fn translations_decode_independently() -> Result<()> {
    let catalog = ObjectNameCatalog::new(sample_file().as_slice())?;

    let english = catalog.translation("english")?;
    let french = catalog.translation("french")?;

    for index in 0..catalog.item_count() {
        assert_eq!(english.item(index)?, french.item(index)?);
    }

    Ok(())
}

#[traced_test]
#[test]
fn unknown_language_is_not_found() -> Result<()> {
    let catalog = ObjectNameCatalog::new(sample_file().as_slice())?;

    assert!(matches!(
        catalog.translation("klingon"),
        Err(Error::LanguageNotFound(name)) if name == "klingon"
    ));

    Ok(())
}

#[traced_test]
#[test]
fn out_of_range_lookups_are_rejected() -> Result<()> {
    let catalog = ObjectNameCatalog::new(sample_file().as_slice())?;
    let english = catalog.translation("english")?;

    assert!(matches!(
        english.item(4),
        Err(Error::IndexOutOfRange { index: 4, count: 4 })
    ));
    assert!(matches!(
        english.colour(255),
        Err(Error::IndexOutOfRange {
            index: 255,
            count: 255
        })
    ));
    assert!(matches!(
        english.subtitle(4),
        Err(Error::IndexOutOfRange { index: 4, count: 4 })
    ));
    assert!(matches!(
        english.metal(2),
        Err(Error::IndexOutOfRange { index: 2, count: 2 })
    ));

    Ok(())
}

#[traced_test]
#[test]
fn truncated_file_fails_to_load() {
    let file = sample_file();

    // Cut inside the language records: the header walk runs out of bytes.
    assert!(ObjectNameCatalog::new(&file[..20]).is_err());

    // Cut inside the item string table: the catalog header still loads but
    // decoding the translation fails.
    let catalog = ObjectNameCatalog::new(&file[..file.len() - 600]).unwrap();
    assert!(catalog.translation("english").is_err());
}

#[cfg(feature = "serde")]
#[traced_test]
#[test]
fn serializes_translation_tables() -> Result<()> {
    let catalog = ObjectNameCatalog::new(sample_file().as_slice())?;
    let english = catalog.translation("english")?;

    let value = serde_json::to_value(&english).expect("translation serializes");

    assert_eq!(value["metals"][1], "Iron");
    assert_eq!(value["items"][0], "Stone Chisel");
    assert_eq!(value["subtitles"][0], "");
    assert_eq!(value["colours"].as_array().map(Vec::len), Some(255));

    Ok(())
}
