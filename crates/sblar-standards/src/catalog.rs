//! The SBLAR field catalog.
//!
//! Declares all 81 fields of a filing in filing order, each with its display
//! title and the checks the published rule set applies to it. Fields without
//! checks are still declared so a schema lists the complete layout.

use tracing::debug;

use sblar_validate::{
    CheckDescriptor, ColumnSchema, ConditionalCheck, ElementCheck, EnumPairing, NumericBound,
    Predicate, Schema,
};

use crate::error::Result;
use crate::options::CatalogOptions;

/// Maximum length of free-form text fields.
const FREE_FORM_MAX_LEN: usize = 300;

/// Number of principal owners reported per application.
const PRINCIPAL_OWNERS: usize = 4;

/// Build the catalog with the default options.
pub fn load_default_schema() -> Result<Schema> {
    sblar_schema(&CatalogOptions::default())
}

/// Build the catalog.
pub fn sblar_schema(options: &CatalogOptions) -> Result<Schema> {
    debug!(
        reporting_period = %options.reporting_period.describe(),
        application_window_days = options.application_window_days,
        other_code = %options.other_code,
        "building SBLAR catalog"
    );

    let mut columns = application_fields();
    columns.extend(credit_fields(options)?);
    columns.extend(action_fields(options)?);
    columns.extend(pricing_fields(options)?);
    columns.extend(business_fields()?);
    columns.extend(principal_owner_fields());

    Ok(Schema::new(columns)?)
}

fn check_name(column: &str, suffix: &str) -> String {
    format!("{column}.{suffix}")
}

fn invalid_enum(column: &str, description: &str, accepted: &[&str]) -> CheckDescriptor {
    CheckDescriptor::error(
        check_name(column, "invalid_enum_value"),
        description,
        ElementCheck::enumeration(accepted.iter().copied()),
    )
}

fn invalid_value_count(
    column: &str,
    description: &str,
    min: usize,
    max: Option<usize>,
) -> Result<CheckDescriptor> {
    Ok(CheckDescriptor::error(
        check_name(column, "invalid_number_of_values"),
        description,
        ElementCheck::value_count(min, max)?,
    ))
}

fn duplicates_in_field(column: &str, description: &str) -> CheckDescriptor {
    CheckDescriptor::warning(
        check_name(column, "duplicates_in_field"),
        description,
        ElementCheck::UniqueValues,
    )
}

fn multi_value_restriction(column: &str, description: &str, single: &[&str]) -> CheckDescriptor {
    CheckDescriptor::warning(
        check_name(column, "multi_value_field_restriction"),
        description,
        ElementCheck::single_values(single.iter().copied()),
    )
}

fn free_form_length(column: &str, description: &str) -> Result<CheckDescriptor> {
    Ok(CheckDescriptor::error(
        check_name(column, "invalid_text_length"),
        description,
        ElementCheck::text_length(0, FREE_FORM_MAX_LEN)?,
    ))
}

fn field_conflict(
    column: &str,
    description: &str,
    groupby: &str,
    condition_values: &[&str],
) -> CheckDescriptor {
    CheckDescriptor::error(
        check_name(column, "conditional_field_conflict"),
        description,
        Predicate::conditional(
            groupby,
            ConditionalCheck::field_conflict(condition_values.iter().copied()),
        ),
    )
}

fn numeric_format(column: &str, description: &str) -> CheckDescriptor {
    CheckDescriptor::error(
        check_name(column, "invalid_numeric_format"),
        description,
        ElementCheck::Number,
    )
}

/// Fields 1-6.
fn application_fields() -> Vec<ColumnSchema> {
    vec![
        ColumnSchema::new("uid", "Field 1: Unique identifier"),
        ColumnSchema::new("app_date", "Field 2: Application date"),
        ColumnSchema::new("app_method", "Field 3: Application method"),
        ColumnSchema::new("app_recipient", "Field 4: Application recipient").with_check(
            invalid_enum(
                "app_recipient",
                "'Application recipient' must equal 1 or 2",
                &["1", "2"],
            ),
        ),
        ColumnSchema::new("ct_credit_product", "Field 5: Credit product"),
        ColumnSchema::new(
            "ct_credit_product_ff",
            "Field 6: Free-form text field for other credit products",
        ),
    ]
}

/// Fields 7-15: guarantees, loan term, credit purpose and amounts.
fn credit_fields(options: &CatalogOptions) -> Result<Vec<ColumnSchema>> {
    Ok(vec![
        ColumnSchema::new("ct_guarantee", "Field 7: Type of guarantee").with_checks([
            invalid_value_count(
                "ct_guarantee",
                "'Type of guarantee' must contain at least one and at most five values, \
                 separated by semicolons.",
                1,
                Some(5),
            )?,
            duplicates_in_field(
                "ct_guarantee",
                "'Type of guarantee' should not contain duplicated values.",
            ),
            multi_value_restriction(
                "ct_guarantee",
                "When 'type of guarantee' contains 999 (no guarantee), 'type of guarantee' \
                 should not contain more than one value.",
                &["999"],
            ),
            invalid_enum(
                "ct_guarantee",
                "Each value in 'type of guarantee' (separated by semicolons) must equal 1, 2, \
                 3, 4, 5, 6, 7, 8, 9, 10, 11, 977, or 999.",
                &[
                    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "977", "999",
                ],
            ),
        ]),
        ColumnSchema::new(
            "ct_guarantee_ff",
            "Field 8: Free-form text field for other guarantee",
        )
        .with_checks([
            free_form_length(
                "ct_guarantee_ff",
                "'Free-form text field for other guarantee' must not exceed 300 characters \
                 in length",
            )?,
            field_conflict(
                "ct_guarantee_ff",
                "When 'type of guarantee' does not contain 977 (other), 'free-form text \
                 field for other guarantee' must be blank. When 'type of guarantee' contains \
                 977, 'free-form text field for other guarantee' must not be blank.",
                "ct_guarantee",
                &[options.other_code.as_str()],
            ),
            CheckDescriptor::warning(
                "ct_guarantee_ff.multi_invalid_number_of_values",
                "'Type of guarantee' and 'free-form text field for other guarantee' combined \
                 should not contain more than five values. Code 977 (other), within 'type of \
                 guarantee', does not count toward the maximum number of values for the \
                 purpose of this validation check.",
                Predicate::conditional(
                    "ct_guarantee",
                    ConditionalCheck::multi_field_value_count(5, options.other_code.as_str()),
                ),
            ),
        ]),
        ColumnSchema::new("ct_loan_term_flag", "Field 9: Loan term: NA/NP flag").with_checks([
            invalid_enum(
                "ct_loan_term_flag",
                "Each value in 'Loan term: NA/NP flag' (separated by semicolons) must equal \
                 900, 988, or 999.",
                &["900", "988", "999"],
            ),
            CheckDescriptor::error(
                "ct_loan_term_flag.enum_value_conflict",
                "When 'credit product' equals 1 (term loan - unsecured) or 2 (term loan - \
                 secured), 'loan term: NA/NP flag' must not equal 999 (not applicable).",
                Predicate::conditional(
                    "ct_credit_product",
                    ConditionalCheck::enum_pair(EnumPairing::must_differ(["1", "2"]), "999"),
                ),
            ),
            CheckDescriptor::error(
                "ct_loan_term_flag.enum_value_conflict.not_provided",
                "When 'credit product' equals 988 (not provided by applicant and otherwise \
                 undetermined), 'loan term: NA/NP flag' must equal 999.",
                Predicate::conditional(
                    "ct_credit_product",
                    ConditionalCheck::enum_pair(EnumPairing::must_equal(["988"]), "999"),
                ),
            ),
        ]),
        ColumnSchema::new("ct_loan_term", "Field 10: Loan term").with_checks([
            field_conflict(
                "ct_loan_term",
                "When 'loan term: NA/NP flag' does not equal 900 (applicable and reported), \
                 'loan term' must be blank. When 'loan term: NA/NP flag' equals 900, 'loan \
                 term' must not be blank.",
                "ct_loan_term_flag",
                &["900"],
            ),
            numeric_format(
                "ct_loan_term",
                "When present, 'loan term' must be a whole number.",
            ),
            CheckDescriptor::error(
                "ct_loan_term.invalid_numeric_value",
                "When present, 'loan term' must be greater than or equal to 1.",
                ElementCheck::NumericBound(NumericBound::GreaterThanOrEqual(1.0)),
            ),
            CheckDescriptor::error(
                "ct_loan_term.unreasonable_numeric_value",
                "When present, 'loan term' should be less than 1200 (100 years).",
                ElementCheck::NumericBound(NumericBound::LessThan(1200.0)),
            ),
        ]),
        ColumnSchema::new("credit_purpose", "Field 11: Credit purpose").with_checks([
            invalid_enum(
                "credit_purpose",
                "Each value in 'credit purpose' (separated by semicolons) must equal 1, 2, 3, \
                 4, 5, 6, 7, 8, 9, 10, 11, 977, 988, or 999.",
                &[
                    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "977", "988", "999",
                ],
            ),
            invalid_value_count(
                "credit_purpose",
                "'Credit purpose' must contain at least one and at most three values, \
                 separated by semicolons.",
                1,
                Some(3),
            )?,
            multi_value_restriction(
                "credit_purpose",
                "When 'credit purpose' contains 988 or 999, 'credit purpose' should not \
                 contain more than one value.",
                &["988", "999"],
            ),
            duplicates_in_field(
                "credit_purpose",
                "'Credit purpose' should not contain duplicated values.",
            ),
        ]),
        ColumnSchema::new(
            "credit_purpose_ff",
            "Field 12: Free-form text field for other credit purpose",
        )
        .with_checks([
            free_form_length(
                "credit_purpose_ff",
                "'Free-form text field for other credit purpose' must not exceed 300 \
                 characters in length",
            )?,
            field_conflict(
                "credit_purpose_ff",
                "When 'credit purpose' does not contain 977 (other), 'free-form text field for \
                 other credit purpose' must be blank. When 'credit purpose' contains 977, \
                 'free-form text field for other credit purpose' must not be blank.",
                "credit_purpose",
                &[options.other_code.as_str()],
            ),
            invalid_value_count(
                "credit_purpose_ff",
                "'Other Credit purpose' must not contain more than one other credit purpose.",
                0,
                Some(1),
            )?,
        ]),
        ColumnSchema::new(
            "amount_applied_for_flag",
            "Field 13: Amount applied for: NA/NP flag",
        )
        .with_check(invalid_enum(
            "amount_applied_for_flag",
            "'Amount applied For: NA/NP flag' must equal 900, 988, or 999.",
            &["900", "988", "999"],
        )),
        ColumnSchema::new("amount_applied_for", "Field 14: Amount applied for").with_checks([
            field_conflict(
                "amount_applied_for",
                "When 'amount applied for: NA/NP flag' does not equal 900 (applicable and \
                 reported), 'amount applied for' must be blank. When 'amount applied for: \
                 NA/NP flag' equals 900, 'amount applied for' must not be blank.",
                "amount_applied_for_flag",
                &["900"],
            ),
            numeric_format(
                "amount_applied_for",
                "When present, 'amount applied for' must be a numeric value.",
            ),
            CheckDescriptor::error(
                "amount_applied_for.invalid_numeric_value",
                "When present, 'amount applied for' must be greater than 0.",
                ElementCheck::NumericBound(NumericBound::GreaterThan(0.0)),
            ),
        ]),
        ColumnSchema::new("amount_approved", "Field 15: Amount approved or originated")
            .with_checks([
                numeric_format(
                    "amount_approved",
                    "When present, 'amount approved or originated' must be a numeric value.",
                ),
                CheckDescriptor::error(
                    "amount_approved.invalid_numeric_value",
                    "When present, 'amount approved or originated' must be greater than 0.",
                    ElementCheck::NumericBound(NumericBound::GreaterThan(0.0)),
                ),
                field_conflict(
                    "amount_approved",
                    "When 'action taken' does not equal 1 (originated) or 2 (approved but not \
                     accepted), 'amount approved or originated' must be blank. When 'action \
                     taken' equals 1 or 2, 'amount approved or originated' must not be blank.",
                    "action_taken",
                    &["1", "2"],
                ),
            ]),
    ])
}

/// Fields 16-19: action taken and denial reasons.
fn action_fields(options: &CatalogOptions) -> Result<Vec<ColumnSchema>> {
    let (start, end) = options.reporting_period.bounds();
    Ok(vec![
        ColumnSchema::new("action_taken", "Field 16: Action taken").with_check(invalid_enum(
            "action_taken",
            "'Action taken' must equal 1, 2, 3, 4, or 5.",
            &["1", "2", "3", "4", "5"],
        )),
        ColumnSchema::new("action_taken_date", "Field 17: Action taken date").with_checks([
            CheckDescriptor::error(
                "action_taken_date.invalid_date_format",
                "'Action taken date' must be a real calendar date using YYYYMMDD format.",
                ElementCheck::Date,
            ),
            CheckDescriptor::error(
                "action_taken_date.invalid_date_value",
                format!(
                    "The date indicated by 'action taken date' must occur within the current \
                     reporting period: {}.",
                    options.reporting_period.describe()
                ),
                ElementCheck::date_in_range(&start, &end)?,
            ),
            CheckDescriptor::error(
                "action_taken_date.date_value_conflict",
                "The date indicated by 'action taken date' must occur on or after \
                 'application date'.",
                Predicate::conditional("app_date", ConditionalCheck::DateAfter),
            ),
            CheckDescriptor::warning(
                "action_taken_date.unreasonable_date_value",
                format!(
                    "The date indicated by 'application date' should generally be less than \
                     {} days before 'action taken date'.",
                    options.application_window_days
                ),
                Predicate::conditional(
                    "app_date",
                    ConditionalCheck::DateBeforeInDays {
                        days: options.application_window_days,
                    },
                ),
            ),
        ]),
        ColumnSchema::new("denial_reasons", "Field 18: Denial reason(s)").with_checks([
            invalid_enum(
                "denial_reasons",
                "Each value in 'denial reason(s)' (separated by semicolons) must equal 1, 2, \
                 3, 4, 5, 6, 7, 8, 9, 977, or 999.",
                &["1", "2", "3", "4", "5", "6", "7", "8", "9", "977", "999"],
            ),
            invalid_value_count(
                "denial_reasons",
                "'Denial reason(s)' must contain at least one and at most four values, \
                 separated by semicolons.",
                1,
                Some(4),
            )?,
            CheckDescriptor::error(
                "denial_reasons.enum_value_conflict",
                "When 'action taken' equals 3, 'denial reason(s)' must not contain 999. When \
                 'action taken' does not equal 3, 'denial reason(s)' must equal 999.",
                Predicate::conditional("action_taken", ConditionalCheck::DenialReasons),
            ),
            multi_value_restriction(
                "denial_reasons",
                "When 'denial reason(s)' contains 999 (not applicable), 'denial reason(s)' \
                 should not contain more than one value.",
                &["999"],
            ),
            duplicates_in_field(
                "denial_reasons",
                "'Denial reason(s)' should not contain duplicated values.",
            ),
        ]),
        ColumnSchema::new(
            "denial_reasons_ff",
            "Field 19: Free-form text field for other denial reason(s)",
        )
        .with_checks([
            free_form_length(
                "denial_reasons_ff",
                "'Free-form text field for other denial reason(s)' must not exceed 300 \
                 characters in length.",
            )?,
            field_conflict(
                "denial_reasons_ff",
                "When 'denial reason(s)' does not contain 977 (other), 'free-form text field \
                 for other denial reason(s)' must be blank. When 'denial reason(s)' contains \
                 977, 'free-form text field for other denial reason(s)' must not be blank.",
                "denial_reasons",
                &[options.other_code.as_str()],
            ),
        ]),
    ])
}

/// Fields 20-33: pricing.
fn pricing_fields(options: &CatalogOptions) -> Result<Vec<ColumnSchema>> {
    Ok(vec![
        ColumnSchema::new("pricing_interest_rate_type", "Field 20: Interest rate type")
            .with_check(invalid_enum(
                "pricing_interest_rate_type",
                "Each value in 'Interest rate type' (separated by semicolons) must equal 1, 2, \
                 3, 4, 5, 6, or 999",
                &["1", "2", "3", "4", "5", "6", "999"],
            )),
        ColumnSchema::new("pricing_init_rate_period", "Field 21: Initial rate period")
            .with_checks([
                field_conflict(
                    "pricing_init_rate_period",
                    "When 'interest rate type' does not equal 3 (initial rate period > 12 \
                     months, variable interest), 4 (initial rate period > 12 months, fixed \
                     interest), 5 (initial rate period <= 12 months, variable interest), or 6 \
                     (initial rate period <= 12 months, fixed interest), 'initial rate period' \
                     must be blank.",
                    "pricing_interest_rate_type",
                    &["3", "4", "5", "6"],
                ),
                numeric_format(
                    "pricing_init_rate_period",
                    "When present, 'initial rate period' must be a whole number.",
                ),
                CheckDescriptor::error(
                    "pricing_init_rate_period.invalid_numeric_value",
                    "When present, 'initial rate period' must be greater than 0",
                    ElementCheck::NumericBound(NumericBound::GreaterThan(0.0)),
                ),
            ]),
        ColumnSchema::new("pricing_fixed_rate", "Field 22: Fixed rate: interest rate")
            .with_checks([
                numeric_format(
                    "pricing_fixed_rate",
                    "When present, 'fixed rate: interest rate' must be a numeric value.",
                ),
                field_conflict(
                    "pricing_fixed_rate",
                    "When 'interest rate type' does not equal 2 (fixed interest rate, no \
                     initial rate period), 4 (initial rate period > 12 months, fixed interest \
                     rate), or 6 (initial rate period <= 12 months, fixed interest rate), \
                     'fixed rate: interest rate' must be blank. When 'interest rate type' \
                     equals 2, 4, or 6, 'fixed rate: interest rate' must not be blank.",
                    "pricing_interest_rate_type",
                    &["2", "4", "6"],
                ),
                CheckDescriptor::error(
                    "pricing_fixed_rate.unreasonable_numeric_value",
                    "When present, 'fixed rate: interest rate' should generally be greater \
                     than 0.1.",
                    ElementCheck::NumericBound(NumericBound::GreaterThan(0.1)),
                ),
            ]),
        ColumnSchema::new(
            "pricing_var_margin",
            "Field 23: Variable rate transaction: margin",
        )
        .with_checks([
            numeric_format(
                "pricing_var_margin",
                "When present, 'variable rate transaction: margin' must be a numeric value.",
            ),
            field_conflict(
                "pricing_var_margin",
                "When 'interest rate type' does not equal 1 (variable interest rate, no \
                 initial rate period), 3 (initial rate period > 12 months, variable interest \
                 rate), or 5 (initial rate period <= 12 months, variable interest rate), \
                 'variable rate transaction: margin' must be blank. When 'interest rate type' \
                 equals 1, 3, or 5, 'variable rate transaction: margin' must not be blank.",
                "pricing_interest_rate_type",
                &["1", "3", "5"],
            ),
            CheckDescriptor::error(
                "pricing_var_margin.unreasonable_numeric_value",
                "When present, 'variable rate transaction: margin' should generally be \
                 greater than 0.1.",
                ElementCheck::NumericBound(NumericBound::GreaterThan(0.1)),
            ),
        ]),
        ColumnSchema::new(
            "pricing_var_index_name",
            "Field 24: Variable rate transaction: index name",
        )
        .with_checks([
            invalid_enum(
                "pricing_var_index_name",
                "'Variable rate transaction: index name' must equal 1, 2, 3, 4, 5, 6, 7, 8, 9, \
                 10, 977, or 999.",
                &["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "977", "999"],
            ),
            CheckDescriptor::error(
                "pricing_var_index_name.enum_value_conflict",
                "When 'interest rate type' equals 1 (variable interest rate, no initial rate \
                 period), 3 (initial rate period > 12 months, variable interest rate), or 5 \
                 (initial rate period <= 12 months, variable interest rate), 'variable rate \
                 transaction: index name' must not equal 999.",
                Predicate::conditional(
                    "pricing_interest_rate_type",
                    ConditionalCheck::enum_pair(
                        EnumPairing::must_differ(["1", "3", "5"]),
                        "999",
                    ),
                ),
            ),
        ]),
        ColumnSchema::new(
            "pricing_var_index_name_ff",
            "Field 25: Variable rate transaction: index name: other",
        )
        .with_checks([
            free_form_length(
                "pricing_var_index_name_ff",
                "'Variable rate transaction: index name: other' must not exceed 300 \
                 characters in length.",
            )?,
            field_conflict(
                "pricing_var_index_name_ff",
                "When 'variable rate transaction: index name' does not equal 977 (other), \
                 'variable rate transaction: index name: other' must be blank. When 'variable \
                 rate transaction: index name' equals 977, 'variable rate transaction: index \
                 name: other' must not be blank.",
                "pricing_var_index_name",
                &[options.other_code.as_str()],
            ),
        ]),
        ColumnSchema::new(
            "pricing_var_index_value",
            "Field 26: Variable rate transaction: index value",
        )
        .with_checks([
            numeric_format(
                "pricing_var_index_value",
                "When present, 'variable rate transaction: index value' must be a numeric \
                 value.",
            ),
            field_conflict(
                "pricing_var_index_value",
                "When 'interest rate type' does not equal 1 (variable interest rate, no \
                 initial rate period), or 3 (initial rate period > 12 months, variable \
                 interest rate), 'variable rate transaction: index value' must be blank. When \
                 'interest rate type' equals 1 or 3, 'variable rate transaction: index value' \
                 must not be blank.",
                "pricing_interest_rate_type",
                &["1", "3"],
            ),
        ]),
        ColumnSchema::new(
            "pricing_origination_charges",
            "Field 27: Total origination charges",
        )
        .with_check(numeric_format(
            "pricing_origination_charges",
            "When present, 'total origination charges' must be a numeric value.",
        )),
        ColumnSchema::new("pricing_broker_fees", "Field 28: Amount of total broker fees")
            .with_check(numeric_format(
                "pricing_broker_fees",
                "When present, 'amount of total broker fees' must be a numeric value.",
            )),
        ColumnSchema::new("pricing_initial_charges", "Field 29: Initial annual charges")
            .with_check(numeric_format(
                "pricing_initial_charges",
                "When present, 'initial annual charges' must be a numeric value.",
            )),
        ColumnSchema::new(
            "pricing_mca_addcost_flag",
            "Field 30: MCA/sales-based: additional cost for merchant cash advances or other \
             sales-based financing: NA flag",
        ),
        ColumnSchema::new(
            "pricing_mca_addcost",
            "Field 31: MCA/sales-based: additional cost for merchant cash advances or other \
             sales-based financing",
        ),
        ColumnSchema::new(
            "pricing_prepenalty_allowed",
            "Field 32: Prepayment penalty could be imposed",
        )
        .with_check(invalid_enum(
            "pricing_prepenalty_allowed",
            "'Prepayment penalty could be imposed' must equal 1, 2, or 999.",
            &["1", "2", "999"],
        )),
        ColumnSchema::new(
            "pricing_prepenalty_exists",
            "Field 33: Prepayment penalty exists",
        )
        .with_check(invalid_enum(
            "pricing_prepenalty_exists",
            "'Prepayment penalty exists' must equal 1, 2, or 999.",
            &["1", "2", "999"],
        )),
    ])
}

/// Fields 34-45: census tract, revenue, industry, workers, time in business
/// and ownership.
fn business_fields() -> Result<Vec<ColumnSchema>> {
    Ok(vec![
        ColumnSchema::new("census_tract_adr_type", "Field 34: Type of address"),
        ColumnSchema::new("census_tract_number", "Field 35: Tract number"),
        ColumnSchema::new(
            "gross_annual_revenue_flag",
            "Field 36: Gross annual revenue: NP flag",
        )
        .with_check(invalid_enum(
            "gross_annual_revenue_flag",
            "'Gross annual revenue: NP flag' must equal 900 or 988.",
            &["900", "988"],
        )),
        ColumnSchema::new("gross_annual_revenue", "Field 37: Gross annual revenue").with_checks(
            [
                numeric_format(
                    "gross_annual_revenue",
                    "When present, 'gross annual revenue' must be a numeric value.",
                ),
                field_conflict(
                    "gross_annual_revenue",
                    "When 'gross annual revenue: NP flag' does not equal 900 (reported), \
                     'gross annual revenue' must be blank. When 'gross annual revenue: NP \
                     flag' equals 900, 'gross annual revenue' must not be blank.",
                    "gross_annual_revenue_flag",
                    &["900"],
                ),
            ],
        ),
        ColumnSchema::new(
            "naics_code_flag",
            "Field 38: North American Industry Classification System (NAICS) code: NP flag",
        ),
        ColumnSchema::new(
            "naics_code",
            "Field 39: North American Industry Classification System (NAICS) code",
        ),
        ColumnSchema::new("number_of_workers", "Field 40: Number of workers").with_check(
            invalid_enum(
                "number_of_workers",
                "'Number of workers' must equal 1, 2, 3, 4, 5, 6, 7, 8, 9, or 988.",
                &["1", "2", "3", "4", "5", "6", "7", "8", "9", "988"],
            ),
        ),
        ColumnSchema::new("time_in_business_type", "Field 41: Type of response"),
        ColumnSchema::new("time_in_business", "Field 42: Time in business"),
        ColumnSchema::new(
            "business_ownership_status",
            "Field 43: Business ownership status",
        )
        .with_checks([
            invalid_enum(
                "business_ownership_status",
                "Each value in 'business ownership status' (separated by semicolons) must \
                 equal 1, 2, 3, 955, 966, or 988.",
                &["1", "2", "3", "955", "966", "988"],
            ),
            invalid_value_count(
                "business_ownership_status",
                "'Business ownership status' must contain at least one value.",
                1,
                None,
            )?,
            duplicates_in_field(
                "business_ownership_status",
                "'Business ownership status' should not contain duplicated values.",
            ),
            multi_value_restriction(
                "business_ownership_status",
                "When 'business ownership status' contains 966 (the applicant responded that \
                 they did not wish to provide this information) or 988 (not provided by \
                 applicant), 'business ownership status' should not contain more than one \
                 value.",
                &["966", "988"],
            ),
        ]),
        ColumnSchema::new(
            "num_principal_owners_flag",
            "Field 44: Number of principal owners: NP flag",
        ),
        ColumnSchema::new("num_principal_owners", "Field 45: Number of principal owners"),
    ])
}

/// Fields 46-81: nine demographic fields for each principal owner.
fn principal_owner_fields() -> Vec<ColumnSchema> {
    let mut columns = Vec::with_capacity(PRINCIPAL_OWNERS * 9);
    let mut field = 46;
    for owner in 1..=PRINCIPAL_OWNERS {
        let layout = [
            ("ethnicity", format!("Ethnicity of principal owner {owner}")),
            (
                "ethnicity_ff",
                format!(
                    "Ethnicity of principal owner {owner}: free-form text field for other \
                     Hispanic or Latino ethnicity"
                ),
            ),
            ("race", format!("Race of principal owner {owner}")),
            (
                "race_anai_ff",
                format!(
                    "Race of principal owner {owner}: free-form text field for American Indian \
                     or Alaska Native Enrolled or Principal Tribe"
                ),
            ),
            (
                "race_asian_ff",
                format!(
                    "Race of principal owner {owner}: free-form text field for other Asian race"
                ),
            ),
            (
                "race_baa_ff",
                format!(
                    "Race of principal owner {owner}: free-form text field for other Black or \
                     African American race"
                ),
            ),
            (
                "race_pi_ff",
                format!(
                    "Race of principal owner {owner}: free-form text field for other Pacific \
                     Islander race"
                ),
            ),
            (
                "gender_flag",
                format!("Sex/gender of principal owner {owner}: NP flag"),
            ),
            (
                "gender_ff",
                format!(
                    "Sex/gender of principal owner {owner}: free-form text field for \
                     self-identified sex/gender"
                ),
            ),
        ];
        for (suffix, title) in layout {
            columns.push(ColumnSchema::new(
                format!("po_{owner}_{suffix}"),
                format!("Field {field}: {title}"),
            ));
            field += 1;
        }
    }
    columns
}
