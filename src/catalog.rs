//! The listing of played matches published alongside the posters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::match_data::MatchRecord;
use crate::text::{listing_date, parse_datetime};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SideValues {
    pub home: f64,
    pub away: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub ball_possession: SideValues,
    pub attempts: SideValues,
    pub passes: SideValues,
    pub distance: SideValues,
}
impl CatalogStats {
    /// Raw counters; distance sums the four running categories.
    pub fn from_record(record: &MatchRecord) -> Self {
        let (home, away) = (&record.home_team_statistics, &record.away_team_statistics);
        Self {
            ball_possession: SideValues {
                home: home.ball_possession,
                away: away.ball_possession,
            },
            attempts: SideValues {
                home: home.attempts_on_goal,
                away: away.attempts_on_goal,
            },
            passes: SideValues {
                home: home.num_passes,
                away: away.num_passes,
            },
            distance: SideValues {
                home: home.total_distance(),
                away: away.total_distance(),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Position among the listed matches, which is also the poster index.
    pub id: usize,
    pub title: String,
    pub url: String,
    pub stage: String,
    pub date: String,
    pub image: String,
    pub stats: CatalogStats,
}

/// Folds the common Latin diacritics onto their base letter, e.g. `ô` onto `o`.
fn fold_diacritic(c: char) -> Option<&'static str> {
    let folded = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => "a",
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' => "A",
        'æ' => "ae",
        'Æ' => "AE",
        'ç' | 'ć' | 'č' => "c",
        'Ç' | 'Ć' | 'Č' => "C",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ę' | 'ě' => "e",
        'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ę' | 'Ě' => "E",
        'ì' | 'í' | 'î' | 'ï' | 'ī' => "i",
        'Ì' | 'Í' | 'Î' | 'Ï' | 'Ī' => "I",
        'ñ' | 'ń' | 'ň' => "n",
        'Ñ' | 'Ń' | 'Ň' => "N",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => "o",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'Ō' => "O",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' => "u",
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ū' | 'Ů' => "U",
        'ý' | 'ÿ' => "y",
        'Ý' => "Y",
        'ß' => "ss",
        'ś' | 'š' => "s",
        'Ś' | 'Š' => "S",
        'ź' | 'ż' | 'ž' => "z",
        'Ź' | 'Ż' | 'Ž' => "Z",
        'ł' => "l",
        'Ł' => "L",
        _ => return None,
    };
    Some(folded)
}

/// Replaces each run of whitespace with a single `-`, folds Latin diacritics onto their base
/// letter and drops anything else that is not an ASCII letter, digit or `-`.
pub fn slug(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut slug = String::with_capacity(word.len());
            for c in word.chars() {
                if c.is_ascii_alphanumeric() || c == '-' {
                    slug.push(c);
                } else if let Some(folded) = fold_diacritic(c) {
                    slug.push_str(folded);
                }
            }
            slug
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// `07_ARGxKSA.jpg`
pub fn image_name(id: usize, home_code: &str, away_code: &str) -> String {
    format!("{id:02}_{home_code}x{away_code}.jpg")
}

/// Lists the matches that kicked off before `now`, in their stored order.
pub fn build(matches: &[MatchRecord], now: DateTime<Utc>) -> Vec<CatalogEntry> {
    let played = matches.iter().filter_map(|record| match parse_datetime(&record.datetime) {
        Some(kick_off) if kick_off < now => Some((record, kick_off)),
        Some(_) => None,
        None => {
            warn!("skipping {}: unreadable kick-off time '{}'", record.title(), record.datetime);
            None
        }
    });
    let entries = played
        .enumerate()
        .map(|(id, (record, kick_off))| CatalogEntry {
            id,
            title: record.title(),
            url: format!(
                "{}-{}-{id}",
                slug(&record.home_team.name),
                slug(&record.away_team.name)
            ),
            stage: record.stage_name.clone(),
            date: listing_date(&kick_off),
            image: image_name(id, &record.home_team.code, &record.away_team.code),
            stats: CatalogStats::from_record(record),
        })
        .collect::<Vec<_>>();
    debug!("listed {} of {} matches", entries.len(), matches.len());
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{blank_record, sample_record};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 8, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn slugs() {
        assert_eq!("New-Zealand", slug("New Zealand"));
        assert_eq!("Korea-Republic", slug("  Korea   Republic "));
        assert_eq!("Cote-dIvoire", slug("Côte d'Ivoire"));
        assert_eq!("Turkiye-Dansk-Malmo", slug("Türkiye Dansk Malmö"));
        assert_eq!("Strasse", slug("Straße"));
        assert_eq!("", slug("日本"));
        assert_eq!("", slug(""));
    }

    #[test]
    fn image_names() {
        assert_eq!("00_NZLxNOR.jpg", image_name(0, "NZL", "NOR"));
        assert_eq!("33_ENGxDEN.jpg", image_name(33, "ENG", "DEN"));
        assert_eq!("104_ESPxENG.jpg", image_name(104, "ESP", "ENG"));
    }

    #[test]
    fn build_skips_unplayed_and_unreadable() {
        let mut unreadable = sample_record();
        unreadable.datetime = "TBC".into();
        let mut second = sample_record();
        second.home_team.name = "Philippines".into();
        second.home_team.code = "PHI".into();
        second.stage_name = "Group Stage".into();
        second.datetime = "2023-07-25T05:30:00Z".into();
        let matches = vec![sample_record(), blank_record(), unreadable, second];

        let entries = build(&matches, now());
        assert_eq!(2, entries.len());

        let first = &entries[0];
        assert_eq!(0, first.id);
        assert_eq!("New Zealand x Norway", first.title);
        assert_eq!("New-Zealand-Norway-0", first.url);
        assert_eq!("First Stage", first.stage);
        assert_eq!("Jul 20, 2023", first.date);
        assert_eq!("00_NZLxNOR.jpg", first.image);
        assert_eq!(SideValues { home: 43.0, away: 57.0 }, first.stats.ball_possession);
        assert_eq!(SideValues { home: 7.0, away: 13.0 }, first.stats.attempts);
        assert_eq!(SideValues { home: 334.0, away: 471.0 }, first.stats.passes);
        assert_eq!(SideValues { home: 100_000.0, away: 100_000.0 }, first.stats.distance);

        let second = &entries[1];
        assert_eq!(1, second.id);
        assert_eq!("Philippines-Norway-1", second.url);
        assert_eq!("Jul 25, 2023", second.date);
        assert_eq!("01_PHIxNOR.jpg", second.image);
    }

    #[test]
    fn kick_off_at_now_is_not_listed() {
        let mut record = sample_record();
        record.datetime = "2023-08-01T00:00:00Z".into();
        assert!(build(&[record], now()).is_empty());
    }

    #[test]
    fn serialized_keys() {
        let entries = build(&[sample_record()], now());
        let json = serde_json::to_value(&entries).unwrap();
        assert_eq!(43.0, json[0]["stats"]["ballPossession"]["home"]);
        assert_eq!("New-Zealand-Norway-0", json[0]["url"]);
    }
}
