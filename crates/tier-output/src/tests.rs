//! Unit tests for tier-output.

#[cfg(test)]
mod rows {
    use tier_analysis::{
        FacingNeighbor, FacingTierRecord, IndoorRecord, MethodKind, NotFoundReason, Outcome,
        SectorTierRecord, SiteNeighbors, SiteTierRecord, TierRecord,
    };

    use crate::{TierRow, headers};

    #[test]
    fn site_record_joins_neighbors() {
        let rec = TierRecord::Site(SiteTierRecord {
            site_id: "S1".into(),
            outcome: Outcome::Found(SiteNeighbors {
                site_ids:        vec!["S2".into(), "S3".into()],
                avg_distance_km: 1.234,
            }),
        });
        let row = TierRow::from(&rec);
        assert_eq!(row.sector, "ALL");
        assert_eq!(
            row.fields(MethodKind::Voronoi),
            ["S1", "ALL", "S2,S3", "1.23", "km"]
        );
    }

    #[test]
    fn not_found_carries_reason_text() {
        let rec = TierRecord::Sector(SectorTierRecord {
            site_id:   "S1".into(),
            sector_id: "A".into(),
            outcome:   Outcome::NotFound(NotFoundReason::NoCandidatesInBearingRange),
        });
        let row = TierRow::from(&rec);
        assert_eq!(row.first_tier, "No candidates in bearing range");
        assert_eq!(row.fields(MethodKind::BallTree)[3], "0.00");
    }

    #[test]
    fn facing_row_has_h2h_columns() {
        let rec = TierRecord::Facing(FacingTierRecord {
            site_id:   "S1".into(),
            sector_id: "A".into(),
            outcome:   Outcome::Found(FacingNeighbor {
                site_id:      "S2".into(),
                sector_id:    "C".into(),
                head_to_head: true,
                distance_km:  0.9,
            }),
        });
        let fields = TierRow::from(&rec).fields(MethodKind::Facing);
        assert_eq!(fields.len(), headers(MethodKind::Facing).len());
        assert_eq!(fields, ["S1", "A", "S2", "C", "Yes", "0.90", "km"]);
    }

    #[test]
    fn indoor_row() {
        let rec = TierRecord::Indoor(IndoorRecord {
            site_id:   "IN".into(),
            sector_id: "B".into(),
            facing:    true,
        });
        let fields = TierRow::from(&rec).fields(MethodKind::Facing);
        assert_eq!(fields, ["IN", "B", "Indoor", "", "No", "0.00", "km"]);
    }
}

#[cfg(test)]
mod files {
    use chrono::{TimeZone, Utc};

    use tier_analysis::{IndoorRecord, MethodKind, TierRecord};
    use tier_core::Sector;

    use crate::{
        CsvWriter, OUTPUT_DIR_NAME, OutputError, OutputWriter, TierRow, default_output_dir,
        output_file_name, write_results, write_sectors_csv,
    };

    fn indoor(site: &str) -> TierRecord {
        TierRecord::Indoor(IndoorRecord {
            site_id:   site.into(),
            sector_id: "ALL".into(),
            facing:    false,
        })
    }

    #[test]
    fn file_name_uses_prefix_and_timestamp() {
        let t = Utc.with_ymd_and_hms(2024, 1, 31, 23, 59, 58).unwrap();
        assert_eq!(output_file_name(MethodKind::Voronoi, &t), "Site_Voronoi_20240131_235958.csv");
        assert_eq!(output_file_name(MethodKind::Facing, &t), "Sector_Facing_H2H_20240131_235958.csv");
    }

    #[test]
    fn writes_bom_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("nested");
        let t = Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();

        let path = write_results(&out_dir, MethodKind::Voronoi, &[indoor("A"), indoor("B")], &t).unwrap();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("Site_Voronoi_20240506_070809.csv")
        );

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"\xEF\xBB\xBF"));
        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Site ID,Sector,1st_Tier,Average of Distance,Distance_Unit");
        assert_eq!(lines[1], "A,ALL,Indoor,0.00,km");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn empty_results_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let t = Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();
        let err = write_results(dir.path(), MethodKind::BallTree, &[], &t).unwrap_err();
        assert!(matches!(err, OutputError::Empty));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn sector_export_header_is_loader_compatible() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sectors.csv");
        let sectors = vec![
            Sector::new("S1", "A", -6.2, 106.8166, 30.0).with_tilt(4.0),
            Sector::new("S1", "B", -6.2, 106.8166, 150.0),
        ];
        write_sectors_csv(&path, &sectors).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["Site ID", "Sector", "Latitude", "Longitude", "Dir", "tilt"]);
        let rows: Vec<csv::StringRecord> = rdr.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][2], "-6.200000");
        assert_eq!(&rows[0][5], "4");
        assert_eq!(&rows[1][5], "");
    }

    #[test]
    fn default_dir_sits_in_platform_documents_folder() {
        let expected = dirs::document_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join("Documents")))
            .map(|docs| docs.join(OUTPUT_DIR_NAME));
        assert_eq!(default_output_dir(), expected);
        if let Some(dir) = default_output_dir() {
            assert_eq!(dir.file_name().and_then(|n| n.to_str()), Some(OUTPUT_DIR_NAME));
        }
    }

    #[test]
    fn writer_counts_rows_and_finish_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let rows: Vec<TierRow> = [indoor("A"), indoor("B")].iter().map(TierRow::from).collect();

        let mut writer = CsvWriter::create(&path, MethodKind::Voronoi).unwrap();
        writer.write_rows(&rows[..1]).unwrap();
        writer.write_rows(&rows[1..]).unwrap();
        assert_eq!(writer.rows_written(), 2);
        writer.finish().unwrap();
        writer.finish().unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 3);
    }
}
