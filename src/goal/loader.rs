//! Load goals from CSV (one goal per row) or JSON (a single goal)

use super::Goal;
use chrono::NaiveDate;
use csv::Reader;
use rust_decimal::Decimal;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

/// Raw CSV row; amounts stay textual so they parse as exact decimals
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Description", default)]
    description: Option<String>,
    #[serde(rename = "TargetAmount")]
    target_amount: String,
    #[serde(rename = "CurrentAmount")]
    current_amount: String,
    #[serde(rename = "MonthlyContribution")]
    monthly_contribution: String,
    #[serde(rename = "TimeHorizonMonths")]
    time_horizon_months: u32,
    #[serde(rename = "ExpectedReturnRate")]
    expected_return_rate: String,
    #[serde(rename = "InflationRate")]
    inflation_rate: String,
    #[serde(rename = "TargetDate", default)]
    target_date: Option<String>,
}

impl CsvRow {
    fn to_goal(self) -> Result<Goal, Box<dyn Error>> {
        let target_date = match self.target_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(text) => Some(
                NaiveDate::parse_from_str(text, "%Y-%m-%d")
                    .map_err(|e| format!("Invalid TargetDate '{}': {}", text, e))?,
            ),
        };

        let description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        let goal = Goal {
            name: self.name,
            description,
            target_amount: parse_amount("TargetAmount", &self.target_amount)?,
            current_amount: parse_amount("CurrentAmount", &self.current_amount)?,
            monthly_contribution: parse_amount("MonthlyContribution", &self.monthly_contribution)?,
            time_horizon_months: self.time_horizon_months,
            expected_return_rate: parse_amount("ExpectedReturnRate", &self.expected_return_rate)?,
            inflation_rate: parse_amount("InflationRate", &self.inflation_rate)?,
            target_date,
        };

        goal.validate()
            .map_err(|e| format!("Goal '{}': {}", goal.name, e))?;

        Ok(goal)
    }
}

fn parse_amount(column: &str, text: &str) -> Result<Decimal, Box<dyn Error>> {
    Decimal::from_str(text.trim())
        .map_err(|e| format!("Invalid {} '{}': {}", column, text, e).into())
}

/// Load all goals from a CSV file
pub fn load_goals<P: AsRef<Path>>(path: P) -> Result<Vec<Goal>, Box<dyn Error>> {
    let file = File::open(path)?;
    load_goals_from_reader(file)
}

/// Load goals from any reader (e.g., string buffer, network stream)
pub fn load_goals_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Goal>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut goals = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        goals.push(row.to_goal()?);
    }

    Ok(goals)
}

/// Load a single goal from a JSON file
///
/// Keys are camelCase. `description` and `targetDate` are optional and
/// default to absent; `targetDate` is informational and never drives the
/// projection, which runs for `timeHorizonMonths`. Every other key is required.
pub fn load_goal_json<P: AsRef<Path>>(path: P) -> Result<Goal, Box<dyn Error>> {
    load_goal_json_from_reader(BufReader::new(File::open(path)?))
}

/// Load a single goal from JSON read from any reader
pub fn load_goal_json_from_reader<R: std::io::Read>(reader: R) -> Result<Goal, Box<dyn Error>> {
    let goal: Goal = serde_json::from_reader(reader)?;
    goal.validate()?;
    Ok(goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const GOALS_CSV: &str = "\
Name,Description,TargetAmount,CurrentAmount,MonthlyContribution,TimeHorizonMonths,ExpectedReturnRate,InflationRate,TargetDate
Emergency fund,,10000,1000,100,12,6,2,2025-12-31
Retirement,Long term,500000.00,25000.10,1200.55,360,7.25,2.5,
";

    #[test]
    fn test_load_goals() {
        let goals = load_goals_from_reader(GOALS_CSV.as_bytes()).expect("Failed to load goals");
        assert_eq!(goals.len(), 2);

        let g1 = &goals[0];
        assert_eq!(g1.name, "Emergency fund");
        assert_eq!(g1.description, None);
        assert_eq!(g1.target_amount, dec!(10000));
        assert_eq!(g1.target_date, NaiveDate::from_ymd_opt(2025, 12, 31));

        let g2 = &goals[1];
        assert_eq!(g2.description.as_deref(), Some("Long term"));
        assert_eq!(g2.current_amount, dec!(25000.10));
        assert_eq!(g2.monthly_contribution, dec!(1200.55));
        assert_eq!(g2.expected_return_rate, dec!(7.25));
        assert_eq!(g2.time_horizon_months, 360);
        assert_eq!(g2.target_date, None);
    }

    #[test]
    fn test_invalid_goal_row_is_rejected() {
        let csv = "\
Name,Description,TargetAmount,CurrentAmount,MonthlyContribution,TimeHorizonMonths,ExpectedReturnRate,InflationRate,TargetDate
Bad,,10000,-5,100,12,6,2,
";
        let err = load_goals_from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("currentAmount"));
    }

    #[test]
    fn test_unparseable_amount_is_rejected() {
        let csv = "\
Name,Description,TargetAmount,CurrentAmount,MonthlyContribution,TimeHorizonMonths,ExpectedReturnRate,InflationRate,TargetDate
Bad,,lots,0,100,12,6,2,
";
        let err = load_goals_from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("TargetAmount"));
    }

    #[test]
    fn test_json_target_date_is_optional() {
        let without = r#"{"name": "Car", "targetAmount": "20000", "currentAmount": "2000",
            "monthlyContribution": "400", "timeHorizonMonths": 36,
            "expectedReturnRate": "4", "inflationRate": "2"}"#;
        let goal = load_goal_json_from_reader(without.as_bytes()).expect("Failed to load goal");
        assert_eq!(goal.target_date, None);
        assert_eq!(goal.description, None);

        let with = without.replace("\"inflationRate\": \"2\"", "\"inflationRate\": \"2\", \"targetDate\": \"2027-06-30\"");
        let goal = load_goal_json_from_reader(with.as_bytes()).expect("Failed to load goal");
        assert_eq!(goal.target_date, NaiveDate::from_ymd_opt(2027, 6, 30));
    }

    #[test]
    fn test_json_missing_required_key_is_rejected() {
        let json = r#"{"name": "Car", "targetAmount": "20000", "currentAmount": "2000",
            "timeHorizonMonths": 36, "expectedReturnRate": "4", "inflationRate": "2"}"#;
        let err = load_goal_json_from_reader(json.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("monthlyContribution"));
    }

    #[test]
    fn test_load_sample_files() {
        let goals = load_goals("data/sample_goals.csv").expect("Failed to load sample goals");
        assert_eq!(goals.len(), 3);
        assert_eq!(goals[2].name, "Retirement");
        assert_eq!(goals[2].time_horizon_months, 300);

        let goal = load_goal_json("data/sample_goal.json").expect("Failed to load sample goal");
        assert_eq!(goal.name, goals[0].name);
        assert_eq!(goal.target_amount, goals[0].target_amount);
        assert_eq!(goal.expected_return_rate, dec!(4.5));
    }
}
