use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};
use strum::IntoEnumIterator;

use crate::catalog::CatalogEntry;
use crate::match_data::Side;
use crate::poster::PosterIr;
use crate::stats::Metric;

pub fn tabulate_stats(ir: &PosterIr) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(16)).with(HAlign::Left)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
            Col::new(
                Styles::default()
                    .with(Separator(true))
                    .with(MinWidth(10))
                    .with(HAlign::Right),
            ),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "Metric".into(),
                ir.home_code.clone().into(),
                ir.away_code.clone().into(),
                format!("{} share", ir.home_code).into(),
                format!("{} share", ir.away_code).into(),
            ],
        ));

    for metric in Metric::iter() {
        let stat = ir.stats.get(metric);
        table.push_row(Row::new(
            Styles::default(),
            vec![
                metric.to_string().into(),
                format!("{:.0}", stat.home_absolute).into(),
                format!("{:.0}", stat.away_absolute).into(),
                format!("{:.3}", stat.home_fraction).into(),
                format!("{:.3}", stat.away_fraction).into(),
            ],
        ));
    }
    table
}

pub fn tabulate_timeline(ir: &PosterIr) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Centred)),
            Col::new(Styles::default().with(MinWidth(20)).with(HAlign::Left)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Centred)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Centred)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "Minute".into(),
                "Side".into(),
                "Player".into(),
                "Cell".into(),
                "Glyph".into(),
            ],
        ));

    for (event, position) in ir.goals() {
        let code = match event.side {
            Side::Home => &ir.home_code,
            Side::Away => &ir.away_code,
        };
        table.push_row(Row::new(
            Styles::default(),
            vec![
                event.minute_label().into(),
                code.clone().into(),
                event.player.clone().into(),
                format!("{},{}", position.row, position.column).into(),
                format!("{:?}", event.shape()).into(),
            ],
        ));
    }
    table
}

pub fn tabulate_catalog(entries: &[CatalogEntry]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(4)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(30)).with(HAlign::Left)),
            Col::new(Styles::default().with(MinWidth(14)).with(HAlign::Left)),
            Col::new(Styles::default().with(MinWidth(14)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(18)).with(HAlign::Left)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "Id".into(),
                "Title".into(),
                "Stage".into(),
                "Date".into(),
                "Image".into(),
            ],
        ));

    for entry in entries {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                entry.id.to_string().into(),
                entry.title.clone().into(),
                entry.stage.clone().into(),
                entry.date.clone().into(),
                entry.image.clone().into(),
            ],
        ));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PosterConfig;
    use crate::poster::derive;
    use crate::testing::sample_record;

    #[test]
    fn tables_have_a_row_per_item() {
        let ir = derive(&sample_record(), &PosterConfig::default()).unwrap();
        assert_eq!(5, tabulate_stats(&ir).num_rows());
        assert_eq!(2, tabulate_timeline(&ir).num_rows());
        assert_eq!(1, tabulate_catalog(&[]).num_rows());
    }
}
