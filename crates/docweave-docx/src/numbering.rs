//! List definitions (`numbering.xml`)
//!
//! An [`AbstractNum`] describes up to nine list levels. A [`Num`] is the
//! concrete list a paragraph points at through its `numId`; it binds to an
//! abstract definition and may override individual levels.

use docweave_core::xml::{escape, NS_W, XML_DECLARATION};

use crate::types::Justification;

/// Number format of a list level (`w:numFmt`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberFormat {
    #[default]
    Decimal,
    UpperRoman,
    LowerRoman,
    UpperLetter,
    LowerLetter,
    Bullet,
    None,
}

impl NumberFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            NumberFormat::Decimal => "decimal",
            NumberFormat::UpperRoman => "upperRoman",
            NumberFormat::LowerRoman => "lowerRoman",
            NumberFormat::UpperLetter => "upperLetter",
            NumberFormat::LowerLetter => "lowerLetter",
            NumberFormat::Bullet => "bullet",
            NumberFormat::None => "none",
        }
    }
}

/// What follows the number (`w:suff`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelSuffix {
    #[default]
    Tab,
    Space,
    Nothing,
}

impl LevelSuffix {
    pub fn as_str(self) -> &'static str {
        match self {
            LevelSuffix::Tab => "tab",
            LevelSuffix::Space => "space",
            LevelSuffix::Nothing => "nothing",
        }
    }
}

/// One list level (`w:lvl`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberingLevel {
    /// Zero-based level index
    pub level: u32,
    pub start: u32,
    pub format: NumberFormat,
    /// Number text, `%1` through `%9` stand for the level counters
    pub text: String,
    pub justification: Justification,
    pub paragraph_style: String,
    /// Font of the number or bullet
    pub font: String,
    /// Left indent in twips
    pub indent: i32,
    /// Hanging indent in twips
    pub hanging: i32,
    /// Number tab stop in twips; zero is unset
    pub tab_stop: i32,
    pub suffix: LevelSuffix,
}

impl NumberingLevel {
    /// Decimal `%n.` level indented half an inch per level
    pub fn new(level: u32) -> Self {
        let indent = 720 * (level as i32 + 1);
        Self {
            level,
            start: 1,
            format: NumberFormat::Decimal,
            text: format!("%{}.", level + 1),
            justification: Justification::Left,
            paragraph_style: String::new(),
            font: String::new(),
            indent,
            hanging: 360,
            tab_stop: indent,
            suffix: LevelSuffix::Tab,
        }
    }

    pub fn set_start(&mut self, start: u32) -> &mut Self {
        self.start = start;
        self
    }

    pub fn set_format(&mut self, format: NumberFormat) -> &mut Self {
        self.format = format;
        self
    }

    pub fn set_text<S: Into<String>>(&mut self, text: S) -> &mut Self {
        self.text = text.into();
        self
    }

    pub fn set_justification(&mut self, justification: Justification) -> &mut Self {
        self.justification = justification;
        self
    }

    pub fn set_paragraph_style<S: Into<String>>(&mut self, style: S) -> &mut Self {
        self.paragraph_style = style.into();
        self
    }

    pub fn set_font<S: Into<String>>(&mut self, font: S) -> &mut Self {
        self.font = font.into();
        self
    }

    pub fn set_indent(&mut self, indent: i32) -> &mut Self {
        self.indent = indent;
        self
    }

    pub fn set_hanging(&mut self, hanging: i32) -> &mut Self {
        self.hanging = hanging;
        self
    }

    pub fn set_tab_stop(&mut self, tab_stop: i32) -> &mut Self {
        self.tab_stop = tab_stop;
        self
    }

    pub fn set_suffix(&mut self, suffix: LevelSuffix) -> &mut Self {
        self.suffix = suffix;
        self
    }

    fn write_xml(&self, out: &mut String) {
        out.push_str(&format!("<w:lvl w:ilvl=\"{}\">", self.level));
        out.push_str(&format!("<w:start w:val=\"{}\"/>", self.start));
        out.push_str(&format!("<w:numFmt w:val=\"{}\"/>", self.format.as_str()));
        if !self.paragraph_style.is_empty() {
            out.push_str(&format!(
                "<w:pStyle w:val=\"{}\"/>",
                escape(&self.paragraph_style)
            ));
        }
        out.push_str(&format!("<w:suff w:val=\"{}\"/>", self.suffix.as_str()));
        out.push_str(&format!("<w:lvlText w:val=\"{}\"/>", escape(&self.text)));
        out.push_str(&format!(
            "<w:lvlJc w:val=\"{}\"/>",
            self.justification.as_str()
        ));

        out.push_str("<w:pPr>");
        if self.tab_stop > 0 {
            out.push_str(&format!(
                "<w:tabs><w:tab w:val=\"num\" w:pos=\"{}\"/></w:tabs>",
                self.tab_stop
            ));
        }
        out.push_str(&format!(
            "<w:ind w:left=\"{}\" w:hanging=\"{}\"/>",
            self.indent, self.hanging
        ));
        out.push_str("</w:pPr>");

        if !self.font.is_empty() {
            let font = escape(&self.font);
            out.push_str(&format!(
                "<w:rPr><w:rFonts w:ascii=\"{0}\" w:hAnsi=\"{0}\" w:hint=\"default\"/></w:rPr>",
                font
            ));
        }
        out.push_str("</w:lvl>");
    }
}

/// An abstract list definition (`w:abstractNum`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbstractNum {
    pub id: u32,
    pub levels: Vec<NumberingLevel>,
}

impl AbstractNum {
    /// Append a level with the default decimal format
    pub fn add_level(&mut self, level: u32) -> &mut NumberingLevel {
        self.levels.push(NumberingLevel::new(level));
        let last = self.levels.len() - 1;
        &mut self.levels[last]
    }
}

/// Per-list override of one level (`w:lvlOverride`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelOverride {
    pub level: u32,
    /// Restart value; zero omits `w:startOverride`
    pub start_at: u32,
    /// Replacement level definition
    pub numbering_level: Option<NumberingLevel>,
}

impl LevelOverride {
    pub fn set_start_at(&mut self, start_at: u32) -> &mut Self {
        self.start_at = start_at;
        self
    }

    pub fn set_numbering_level(&mut self, level: NumberingLevel) -> &mut Self {
        self.numbering_level = Some(level);
        self
    }
}

/// A concrete list (`w:num`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Num {
    pub id: u32,
    /// Abstract definition this list uses. Not checked against the
    /// numbering part; a dangling ID is written as given.
    pub abstract_num_id: u32,
    pub level_overrides: Vec<LevelOverride>,
}

impl Num {
    /// Override `level`, restarting it at 1
    pub fn add_level_override(&mut self, level: u32) -> &mut LevelOverride {
        self.level_overrides.push(LevelOverride {
            level,
            start_at: 1,
            numbering_level: None,
        });
        let last = self.level_overrides.len() - 1;
        &mut self.level_overrides[last]
    }
}

/// The numbering part
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Numbering {
    pub abstract_nums: Vec<AbstractNum>,
    pub nums: Vec<Num>,
}

impl Numbering {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an abstract definition; IDs count from 1
    pub fn add_abstract_num(&mut self) -> &mut AbstractNum {
        let id = self.abstract_nums.len() as u32 + 1;
        self.abstract_nums.push(AbstractNum {
            id,
            levels: Vec::new(),
        });
        let last = self.abstract_nums.len() - 1;
        &mut self.abstract_nums[last]
    }

    /// Append a list bound to `abstract_num_id`; IDs count from 1
    pub fn add_num(&mut self, abstract_num_id: u32) -> &mut Num {
        let id = self.nums.len() as u32 + 1;
        self.nums.push(Num {
            id,
            abstract_num_id,
            level_overrides: Vec::new(),
        });
        let last = self.nums.len() - 1;
        &mut self.nums[last]
    }

    pub fn abstract_num(&self, id: u32) -> Option<&AbstractNum> {
        self.abstract_nums.iter().find(|a| a.id == id)
    }

    pub fn num(&self, id: u32) -> Option<&Num> {
        self.nums.iter().find(|n| n.id == id)
    }

    /// Nine-level bullet list cycling through solid, hollow and square
    /// bullets. Returns the `numId` for [`Paragraph::set_numbering`].
    ///
    /// [`Paragraph::set_numbering`]: crate::Paragraph::set_numbering
    pub fn create_bullet_list(&mut self) -> u32 {
        const BULLETS: [(&str, &str); 3] = [
            ("\u{2022}", "Symbol"),
            ("\u{25CB}", "Courier New"),
            ("\u{25AA}", "Wingdings"),
        ];
        let abstract_num = self.add_abstract_num();
        for i in 0..9u32 {
            let (text, font) = BULLETS[i as usize % 3];
            abstract_num
                .add_level(i)
                .set_format(NumberFormat::Bullet)
                .set_text(text)
                .set_font(font);
        }
        let abstract_id = abstract_num.id;
        self.add_num(abstract_id).id
    }

    /// Nine-level numbered list cycling decimal, lower letter and lower
    /// roman. Returns the `numId`.
    pub fn create_number_list(&mut self) -> u32 {
        let abstract_num = self.add_abstract_num();
        for i in 0..9u32 {
            let level = abstract_num.add_level(i);
            match i % 3 {
                0 => level
                    .set_format(NumberFormat::Decimal)
                    .set_text(format!("%{}.", i + 1)),
                1 => level
                    .set_format(NumberFormat::LowerLetter)
                    .set_text(format!("%{})", i + 1)),
                _ => level
                    .set_format(NumberFormat::LowerRoman)
                    .set_text(format!("%{})", i + 1)),
            };
        }
        let abstract_id = abstract_num.id;
        self.add_num(abstract_id).id
    }

    /// Serialize the numbering part. Abstract definitions come first.
    pub fn to_xml(&self) -> String {
        let mut out = String::with_capacity(1024);
        out.push_str(XML_DECLARATION);
        out.push_str(&format!("<w:numbering xmlns:w=\"{}\">", NS_W));

        for abstract_num in &self.abstract_nums {
            out.push_str(&format!(
                "<w:abstractNum w:abstractNumId=\"{}\">",
                abstract_num.id
            ));
            for level in &abstract_num.levels {
                level.write_xml(&mut out);
            }
            out.push_str("</w:abstractNum>");
        }

        for num in &self.nums {
            out.push_str(&format!("<w:num w:numId=\"{}\">", num.id));
            out.push_str(&format!(
                "<w:abstractNumId w:val=\"{}\"/>",
                num.abstract_num_id
            ));
            for level_override in &num.level_overrides {
                out.push_str(&format!(
                    "<w:lvlOverride w:ilvl=\"{}\">",
                    level_override.level
                ));
                if level_override.start_at > 0 {
                    out.push_str(&format!(
                        "<w:startOverride w:val=\"{}\"/>",
                        level_override.start_at
                    ));
                }
                if let Some(level) = &level_override.numbering_level {
                    level.write_xml(&mut out);
                }
                out.push_str("</w:lvlOverride>");
            }
            out.push_str("</w:num>");
        }

        out.push_str("</w:numbering>");
        out
    }
}
