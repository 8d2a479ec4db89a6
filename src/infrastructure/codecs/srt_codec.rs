use std::fmt;
use std::str::FromStr;

use crate::application::ports::{CodecError, DocumentCodec};
use crate::domain::{TranslationUnit, UnitAddress};

/// SubRip subtitle codec. One unit per cue, in cue order; indices and timing
/// lines pass through untouched. Input tolerates CRLF line endings and a
/// UTF-8 BOM; output is UTF-8 with `\n` endings.
pub struct SrtCodec;

impl DocumentCodec for SrtCodec {
    fn extract(&self, data: &[u8]) -> Result<Vec<TranslationUnit>, CodecError> {
        let cues = parse_cues(data)?;
        Ok(cues
            .into_iter()
            .enumerate()
            .map(|(position, cue)| {
                TranslationUnit::new(UnitAddress::Cue { index: position }, cue.text)
            })
            .collect())
    }

    fn reinsert(
        &self,
        data: &[u8],
        units: &[TranslationUnit],
        _force_rtl: bool,
    ) -> Result<Vec<u8>, CodecError> {
        let mut cues = parse_cues(data)?;
        if cues.len() != units.len() {
            return Err(CodecError::UnitMismatch {
                expected: cues.len(),
                actual: units.len(),
            });
        }
        for (position, (cue, unit)) in cues.iter_mut().zip(units).enumerate() {
            if unit.address != (UnitAddress::Cue { index: position }) {
                return Err(CodecError::EncodeFailed(format!(
                    "unit address out of order at position {}",
                    position
                )));
            }
            if !cue.text.trim().is_empty() {
                cue.text = unit.text.clone();
            }
        }
        Ok(serialize_cues(&cues).into_bytes())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timecode {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub millis: u32,
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02},{:03}",
            self.hours, self.minutes, self.seconds, self.millis
        )
    }
}

impl FromStr for Timecode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("invalid timecode: {}", s);
        let mut parts = s.trim().splitn(3, ':');
        let hours = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let minutes = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let rest = parts.next().ok_or_else(invalid)?;
        let (seconds_raw, millis_raw) = rest.split_once(',').ok_or_else(invalid)?;
        let seconds = seconds_raw.parse().map_err(|_| invalid())?;
        let millis = millis_raw.parse().map_err(|_| invalid())?;
        Ok(Self {
            hours,
            minutes,
            seconds,
            millis,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleCue {
    pub index: u32,
    pub start: Timecode,
    pub end: Timecode,
    pub text: String,
}

pub fn parse_cues(data: &[u8]) -> Result<Vec<SubtitleCue>, CodecError> {
    let text = std::str::from_utf8(data)
        .map_err(|e| CodecError::DecodeFailed(format!("subtitle file is not UTF-8: {}", e)))?;
    let text = text.trim_start_matches('\u{feff}').replace("\r\n", "\n");

    let mut cues = Vec::new();
    for block in text.split("\n\n") {
        let block = block.trim_matches('\n');
        if block.trim().is_empty() {
            continue;
        }
        let mut lines = block.lines();
        let index_line = lines
            .next()
            .ok_or_else(|| CodecError::DecodeFailed("empty cue block".to_string()))?;
        let index: u32 = index_line.trim().parse().map_err(|_| {
            CodecError::DecodeFailed(format!("invalid cue index: {}", index_line))
        })?;
        let timing_line = lines.next().ok_or_else(|| {
            CodecError::DecodeFailed(format!("cue {} is missing a timing line", index))
        })?;
        let (start_raw, end_raw) = timing_line.split_once("-->").ok_or_else(|| {
            CodecError::DecodeFailed(format!("cue {} has a malformed timing line", index))
        })?;
        let start: Timecode = start_raw.parse().map_err(CodecError::DecodeFailed)?;
        let end: Timecode = end_raw.parse().map_err(CodecError::DecodeFailed)?;
        let cue_text = lines.collect::<Vec<_>>().join("\n");
        cues.push(SubtitleCue {
            index,
            start,
            end,
            text: cue_text,
        });
    }
    Ok(cues)
}

fn serialize_cues(cues: &[SubtitleCue]) -> String {
    let mut out = String::new();
    for cue in cues {
        out.push_str(&cue.index.to_string());
        out.push('\n');
        out.push_str(&format!("{} --> {}\n", cue.start, cue.end));
        if !cue.text.is_empty() {
            out.push_str(&cue.text);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}
