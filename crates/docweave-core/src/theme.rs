//! The Office theme part (`theme/theme1.xml`)

use crate::xml::{escape, NS_A, XML_DECLARATION};

/// Document theme: color scheme plus heading/body typefaces.
///
/// Both package formats reference the theme from their main part; office
/// suites resolve theme colors and fonts through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    /// Heading typeface (major font)
    pub major_font: String,
    /// Body typeface (minor font)
    pub minor_font: String,
    /// dk2, lt2, accent1-6, hlink, folHlink as RRGGBB
    pub colors: ThemeColors,
}

/// Non-system colors of the theme color scheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    pub dark2: String,
    pub light2: String,
    pub accents: [String; 6],
    pub hyperlink: String,
    pub followed_hyperlink: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            dark2: "1F497D".into(),
            light2: "EEECE1".into(),
            accents: [
                "4F81BD".into(),
                "C0504D".into(),
                "9BBB59".into(),
                "8064A2".into(),
                "4BACC6".into(),
                "F79646".into(),
            ],
            hyperlink: "0000FF".into(),
            followed_hyperlink: "800080".into(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::office()
    }
}

impl Theme {
    /// The stock "Office Theme"
    pub fn office() -> Self {
        Self {
            name: "Office Theme".into(),
            major_font: "Calibri".into(),
            minor_font: "Calibri".into(),
            colors: ThemeColors::default(),
        }
    }

    /// Set the heading and body typefaces
    pub fn with_fonts<S: Into<String>>(mut self, major: S, minor: S) -> Self {
        self.major_font = major.into();
        self.minor_font = minor.into();
        self
    }

    /// Serialize as a complete theme part
    pub fn to_xml(&self) -> String {
        let c = &self.colors;
        let mut xml = format!(
            "{}\n<a:theme xmlns:a=\"{}\" name=\"{}\">\n  <a:themeElements>\n    <a:clrScheme name=\"Office\">",
            XML_DECLARATION,
            NS_A,
            escape(&self.name)
        );

        xml.push_str(
            r#"
      <a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>
      <a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#,
        );
        let mut scheme = vec![("dk2", &c.dark2), ("lt2", &c.light2)];
        let accent_tags = ["accent1", "accent2", "accent3", "accent4", "accent5", "accent6"];
        for (tag, color) in accent_tags.into_iter().zip(c.accents.iter()) {
            scheme.push((tag, color));
        }
        scheme.push(("hlink", &c.hyperlink));
        scheme.push(("folHlink", &c.followed_hyperlink));
        for (tag, color) in scheme {
            xml.push_str(&format!(
                "\n      <a:{tag}><a:srgbClr val=\"{}\"/></a:{tag}>",
                escape(color)
            ));
        }
        xml.push_str("\n    </a:clrScheme>");

        xml.push_str("\n    <a:fontScheme name=\"Office\">");
        for (tag, typeface) in [("majorFont", &self.major_font), ("minorFont", &self.minor_font)] {
            xml.push_str(&format!(
                "\n      <a:{tag}>\n        <a:latin typeface=\"{}\"/>\n        <a:ea typeface=\"\"/>\n        <a:cs typeface=\"\"/>\n      </a:{tag}>",
                escape(typeface)
            ));
        }
        xml.push_str("\n    </a:fontScheme>");

        xml.push_str(FORMAT_SCHEME);
        xml.push_str("\n  </a:themeElements>\n  <a:objectDefaults/>\n  <a:extraClrSchemeLst/>\n</a:theme>");
        xml
    }
}

const FORMAT_SCHEME: &str = r#"
    <a:fmtScheme name="Office">
      <a:fillStyleLst>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:gradFill rotWithShape="1">
          <a:gsLst>
            <a:gs pos="0"><a:schemeClr val="phClr"><a:tint val="50000"/><a:satMod val="300000"/></a:schemeClr></a:gs>
            <a:gs pos="35000"><a:schemeClr val="phClr"><a:tint val="37000"/><a:satMod val="300000"/></a:schemeClr></a:gs>
            <a:gs pos="100000"><a:schemeClr val="phClr"><a:tint val="15000"/><a:satMod val="350000"/></a:schemeClr></a:gs>
          </a:gsLst>
          <a:lin ang="16200000" scaled="1"/>
        </a:gradFill>
        <a:gradFill rotWithShape="1">
          <a:gsLst>
            <a:gs pos="0"><a:schemeClr val="phClr"><a:shade val="51000"/><a:satMod val="130000"/></a:schemeClr></a:gs>
            <a:gs pos="80000"><a:schemeClr val="phClr"><a:shade val="93000"/><a:satMod val="130000"/></a:schemeClr></a:gs>
            <a:gs pos="100000"><a:schemeClr val="phClr"><a:shade val="94000"/><a:satMod val="135000"/></a:schemeClr></a:gs>
          </a:gsLst>
          <a:lin ang="16200000" scaled="0"/>
        </a:gradFill>
      </a:fillStyleLst>
      <a:lnStyleLst>
        <a:ln w="9525" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"><a:shade val="95000"/><a:satMod val="105000"/></a:schemeClr></a:solidFill><a:prstDash val="solid"/></a:ln>
        <a:ln w="25400" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/></a:ln>
        <a:ln w="38100" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/></a:ln>
      </a:lnStyleLst>
      <a:effectStyleLst>
        <a:effectStyle><a:effectLst/></a:effectStyle>
        <a:effectStyle><a:effectLst/></a:effectStyle>
        <a:effectStyle><a:effectLst/></a:effectStyle>
      </a:effectStyleLst>
      <a:bgFillStyleLst>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:gradFill rotWithShape="1">
          <a:gsLst>
            <a:gs pos="0"><a:schemeClr val="phClr"><a:tint val="40000"/><a:satMod val="350000"/></a:schemeClr></a:gs>
            <a:gs pos="40000"><a:schemeClr val="phClr"><a:tint val="45000"/><a:shade val="99000"/><a:satMod val="350000"/></a:schemeClr></a:gs>
            <a:gs pos="100000"><a:schemeClr val="phClr"><a:shade val="20000"/><a:satMod val="255000"/></a:schemeClr></a:gs>
          </a:gsLst>
          <a:path path="circle"><a:fillToRect l="50000" t="50000" r="50000" b="50000"/></a:path>
        </a:gradFill>
        <a:gradFill rotWithShape="1">
          <a:gsLst>
            <a:gs pos="0"><a:schemeClr val="phClr"><a:tint val="80000"/><a:satMod val="300000"/></a:schemeClr></a:gs>
            <a:gs pos="100000"><a:schemeClr val="phClr"><a:shade val="30000"/><a:satMod val="200000"/></a:schemeClr></a:gs>
          </a:gsLst>
          <a:path path="circle"><a:fillToRect l="50000" t="50000" r="50000" b="50000"/></a:path>
        </a:gradFill>
      </a:bgFillStyleLst>
    </a:fmtScheme>"#;
