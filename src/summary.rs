use tracing::instrument;

use crate::{calculate_mean, convert_date, convert_f_to_c, round_one_decimal, Celsius};
use crate::{SummaryError, WeatherRecord};

/// Multi-day overview: overall extremes with the day they happen on, and the
/// average low and high.
///
/// On equal extremes the earliest record keeps the date.
#[instrument(skip_all, fields(days = records.len()))]
pub fn generate_summary(records: &[WeatherRecord]) -> Result<String, SummaryError> {
    let mut lows = Vec::with_capacity(records.len());
    let mut highs = Vec::with_capacity(records.len());

    let mut lowest = (f64::INFINITY, String::new());
    let mut highest = (f64::NEG_INFINITY, String::new());

    for record in records {
        let date = convert_date(&record.date)?;
        let low = convert_f_to_c(record.low()?)?;
        let high = convert_f_to_c(record.high()?)?;

        lows.push(low);
        highs.push(high);

        if low < lowest.0 {
            lowest = (low, date.clone());
        }
        if high > highest.0 {
            highest = (high, date);
        }
    }

    let mean_low = round_one_decimal(calculate_mean(&lows)?);
    let mean_high = round_one_decimal(calculate_mean(&highs)?);

    Ok(format!(
        concat!(
            "{days} Day Overview\n",
            "  The lowest temperature will be {}, and will occur on {}.\n",
            "  The highest temperature will be {}, and will occur on {}.\n",
            "  The average low this week is {}.\n",
            "  The average high this week is {}.\n",
        ),
        Celsius(lowest.0),
        lowest.1,
        Celsius(highest.0),
        highest.1,
        Celsius(mean_low),
        Celsius(mean_high),
        days = records.len(),
    ))
}

/// One block per record with its converted low and high.
#[instrument(skip_all, fields(days = records.len()))]
pub fn generate_daily_summary(records: &[WeatherRecord]) -> Result<String, SummaryError> {
    let blocks = records
        .iter()
        .map(|record| -> Result<String, SummaryError> {
            let date = convert_date(&record.date)?;
            let low = Celsius(convert_f_to_c(record.low()?)?);
            let high = Celsius(convert_f_to_c(record.high()?)?);
            Ok(format!(
                "---- {date} ----\n  Minimum Temperature: {low}\n  Maximum Temperature: {high}\n"
            ))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(blocks.join("\n") + "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{find_min, Extremum, Reading};

    fn two_days() -> Vec<WeatherRecord> {
        vec![
            WeatherRecord::new("2021-07-02T07:00:00+08:00", [49, 67]),
            WeatherRecord::new("2021-07-03T07:00:00+08:00", [57, 68]),
        ]
    }

    #[test]
    fn overview_of_two_days() {
        assert_eq!(
            generate_summary(&two_days()).unwrap(),
            "2 Day Overview\n  \
             The lowest temperature will be 9.4°C, and will occur on Friday 02 July 2021.\n  \
             The highest temperature will be 20.0°C, and will occur on Saturday 03 July 2021.\n  \
             The average low this week is 11.7°C.\n  \
             The average high this week is 19.7°C.\n"
        );
    }

    #[test]
    fn daily_of_two_days() {
        assert_eq!(
            generate_daily_summary(&two_days()).unwrap(),
            "---- Friday 02 July 2021 ----\n  \
             Minimum Temperature: 9.4°C\n  \
             Maximum Temperature: 19.4°C\n\
             \n\
             ---- Saturday 03 July 2021 ----\n  \
             Minimum Temperature: 13.9°C\n  \
             Maximum Temperature: 20.0°C\n\
             \n"
        );
    }

    #[test]
    fn same_output_every_time() {
        let records = two_days();
        assert_eq!(
            generate_summary(&records).unwrap(),
            generate_summary(&records).unwrap()
        );
        assert_eq!(
            generate_daily_summary(&records).unwrap(),
            generate_daily_summary(&records).unwrap()
        );
    }

    #[test]
    fn overview_keeps_first_day_on_ties() {
        let records = [
            WeatherRecord::new("2021-07-02T07:00:00+08:00", [49, 67]),
            WeatherRecord::new("2021-07-03T07:00:00+08:00", [49, 67]),
        ];
        let summary = generate_summary(&records).unwrap();
        let lowest = "lowest temperature will be 9.4°C, and will occur on Friday 02 July 2021.";
        let highest = "highest temperature will be 19.4°C, and will occur on Friday 02 July 2021.";
        assert!(summary.contains(lowest), "{summary}");
        assert!(summary.contains(highest), "{summary}");

        // within one series the last tie wins instead
        let lows: Vec<_> = records.iter().map(|r| r.readings[0].clone()).collect();
        assert_eq!(
            find_min(&lows).unwrap(),
            Some(Extremum {
                value: 49.0,
                index: 1
            })
        );
    }

    #[test]
    fn trailing_readings_are_ignored() {
        let records = [WeatherRecord::new(
            "2021-07-06T07:00:00+08:00",
            [53, 62, 0, 120],
        )];
        assert_eq!(
            generate_daily_summary(&records).unwrap(),
            "---- Tuesday 06 July 2021 ----\n  \
             Minimum Temperature: 11.7°C\n  \
             Maximum Temperature: 16.7°C\n\n"
        );
        let summary = generate_summary(&records).unwrap();
        assert!(summary.starts_with("1 Day Overview\n"));
        assert!(summary.contains("The lowest temperature will be 11.7°C"));
        assert!(summary.contains("The highest temperature will be 16.7°C"));
    }

    #[test]
    fn string_readings_are_converted() {
        let records = [WeatherRecord::new(
            "2021-07-06T07:00:00+08:00",
            [Reading::from("32"), Reading::from(" 212 ")],
        )];
        let daily = generate_daily_summary(&records).unwrap();
        assert!(daily.contains("Minimum Temperature: 0.0°C"));
        assert!(daily.contains("Maximum Temperature: 100.0°C"));
    }

    #[test]
    fn empty_dataset() {
        assert!(matches!(
            generate_summary(&[]),
            Err(SummaryError::EmptyInput)
        ));
        assert_eq!(generate_daily_summary(&[]).unwrap(), "\n");
    }

    #[test]
    fn record_errors_propagate() {
        let bad_date = [WeatherRecord::new("July 6th", [53, 62])];
        assert!(matches!(
            generate_summary(&bad_date),
            Err(SummaryError::DateParse { .. })
        ));
        assert!(matches!(
            generate_daily_summary(&bad_date),
            Err(SummaryError::DateParse { .. })
        ));

        let no_high = [WeatherRecord::new("2021-07-06T07:00:00+08:00", [53])];
        assert!(matches!(
            generate_summary(&no_high),
            Err(SummaryError::MissingReading { position: 2, .. })
        ));

        let bad_low = [WeatherRecord::new(
            "2021-07-06T07:00:00+08:00",
            [Reading::from("cold"), Reading::from(62)],
        )];
        assert!(matches!(
            generate_daily_summary(&bad_low),
            Err(SummaryError::Coercion { .. })
        ));
    }
}
