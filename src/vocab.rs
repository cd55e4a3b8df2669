//! Organizational vocabulary: tiers, positions, and district councils.
//!
//! The JC hierarchy has four tiers: the national body, ten district
//! councils, prefecture-level block councils, and local chapters (LOMs).
//! Each tier uses a slightly different vocabulary of positions (the
//! national head is 会頭, a district head is 会長, a LOM head is 理事長).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Organizational tier a region name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrgLevel {
    /// 日本青年会議所, the national body.
    National,
    /// 地区協議会, one of the ten district councils.
    District,
    /// ブロック協議会, a prefecture-level block council.
    Block,
    /// Local chapter (LOM).
    Lom,
}

impl OrgLevel {
    /// Infer the tier from a region name by substring.
    ///
    /// Block wording is checked before district wording so that
    /// "北海道ブロック協議会" is not misread as a district council.
    /// Anything that matches no tier wording is treated as a LOM.
    pub fn detect(region_name: &str) -> Self {
        if region_name.contains("日本青年会議所") {
            Self::National
        } else if region_name.contains("ブロック") {
            Self::Block
        } else if region_name.contains("地区") {
            Self::District
        } else {
            Self::Lom
        }
    }

    /// Returns the lowercase identifier for this tier.
    pub fn name(&self) -> &'static str {
        match self {
            Self::National => "national",
            Self::District => "district",
            Self::Block => "block",
            Self::Lom => "lom",
        }
    }

    /// Positions used at this tier, highest first.
    pub fn positions(&self) -> &'static [&'static str] {
        match self {
            Self::National => &[
                "会頭",
                "副会頭",
                "専務理事",
                "常務理事",
                "運営専務",
                "会務担当副会長",
                "理事",
                "監事",
                "顧問",
                "委員長",
                "副委員長",
                "事務局長",
                "財政局長",
                "総括幹事",
                "会計幹事",
                "庶務幹事",
                "企画幹事",
                "広報幹事",
                "渉外幹事",
                "幹事",
                "副幹事",
                "委員",
                "事務局員",
                "事務局次長",
            ],
            Self::District => &[
                "会長",
                "副会長",
                "専務理事",
                "常務理事",
                "運営専務",
                "会務担当副会長",
                "理事",
                "監事",
                "顧問",
                "委員長",
                "副委員長",
                "事務局長",
                "財政局長",
                "総括幹事",
                "会計幹事",
                "庶務幹事",
                "企画幹事",
                "幹事",
                "副幹事",
                "委員",
                "事務局員",
            ],
            Self::Block => &[
                "会長",
                "副会長",
                "理事長",
                "専務理事",
                "運営専務",
                "会務担当副会長",
                "理事",
                "監事",
                "委員長",
                "副委員長",
                "事務局長",
                "財政局長",
                "総括幹事",
                "会計幹事",
                "幹事",
                "副幹事",
                "委員",
                "事務局員",
            ],
            Self::Lom => &[
                "理事長",
                "副理事長",
                "専務理事",
                "常務理事",
                "運営専務",
                "会務担当副会長",
                "理事",
                "監事",
                "顧問",
                "委員長",
                "副委員長",
                "事務局長",
                "財政局長",
                "総括幹事",
                "会計幹事",
                "庶務幹事",
                "企画幹事",
                "幹事",
                "副幹事",
                "委員",
                "事務局員",
            ],
        }
    }

    /// Returns all tier variants.
    pub fn all() -> &'static [OrgLevel] {
        &[Self::National, Self::District, Self::Block, Self::Lom]
    }
}

impl fmt::Display for OrgLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The ten district councils.
pub const DISTRICT_COUNCILS: &[&str] = &[
    "北海道地区協議会",
    "東北地区協議会",
    "関東地区協議会",
    "北陸信越地区協議会",
    "東海地区協議会",
    "近畿地区協議会",
    "中国地区協議会",
    "四国地区協議会",
    "九州地区協議会",
    "沖縄地区協議会",
];
