//! Default guideline text sent to the text generator
//!
//! This is configuration data, not logic: hosts may swap it for their own
//! version at init time without touching the validator or presenter. The
//! `{functions}` placeholder is filled with the supported function roster
//! when the template is constructed.

/// Identifier of the built-in template revision
pub const DEFAULT_TEMPLATE_ID: &str = "guidelines-v2";

pub const DEFAULT_GUIDELINES: &str = r#"Your task is to generate a mathematical expression that aligns with the user's intent for any dataset. Ensure the expression includes
supported arithmetic operators (+, -, *, /) and any relevant functions [{functions}].

**Expression Guidelines**:
- All the column names should be with (num) or (text) within quotes. Eg. "column1 (num)" or "column2 (text)"
- If the user asks for one column, just give that column in the expression. And conditions can be applied on that one column
    Eg: Give the column1 where column3 contains 1
       Expected Output: {
          "Expression": ""column1 (num)"",
          "Condition_Groups": [
              {"Column_Name": "column3 (num)", "Column_Operator": "contains", "Operand_Type": "Value", "Operand": [1]}
          ]
      }
- If the user asks for average of different columns (mean and average are same):
    Eg: Give the average/mean of column1, column2, column3.
       Expected Output: {"Expression": "("column1 (num)" + "column2 (num)" + "column3 (num)") / 3", "Condition_Groups": [] }

- If the user asks the total/sum of different columns with different conditions:
    Eg. Give the total/sum of column1, column2, column3 where column4 < 10 and column5 has 'test'
       Expected Output: {
          "Expression": "("column1 (num)" + "column2 (num)" + "column3 (num)")",
          "Condition_Groups": [
              {
                  "Group_Operator": "and",
                  "Conditions": [
                      {"Column_Name": "column4 (num)", "Column_Operator": "is less than", "Operand_Type": "Value", "Operand": [10]},
                      {"Column_Name": "column5 (text)", "Column_Operator": "is one of", "Operand_Type": "Value", "Operand": ["test"]}
                  ]
              }
          ]
      }

- `INT(col)` rounds off the values and `ABS(col)` makes the values positive.
- Use ONLY the FUNCTIONS listed above, and FUNCTIONS should be applied ONLY on one column.
- `COUNT()` give the total row count of the dataset and it WILL NOT take any column (exception in functions)

**Multiple Column Handling**:
  - If the user mentions more than one column in the request, use ONLY OPERATORS in the expression.
  - For example, if the user requests to find the average of two columns, ONLY USE OPERATORS.

**Percentage Calculation**:
- When calculating percentages between multiple columns without a user-specified total, assume the total to be 100 multiplied by the number of columns involved
- Eg: For finding the percentage of values across ColumnA and ColumnB without a total provided (Remember to multiply by 100): ("ColumnA" + "ColumnB" / (100 * 2)) * 100

**Condition Grouping**:
- The conditional operator (such as "and" or "or") is applied between two columns rather than within a single column.

**Warnings**:
- If the prompt requests applying a function (like max, int, abs, min, stddev, variance, count) across multiple columns, include a message:
  "Warning: Functions cannot be applied across multiple columns."
- If the user makes an invalid or nonsensical request, respond with:
  "I don't understand. Please change your request."

**Conditions**:
- Include any specified conditions in the output.
- For conditions, identify the target column, operator, operand type, and operand to ensure accurate filtering within the dataset.

Examples:
1. Give the column1
   Expected Output: {"Expression": ""column1 (num)"", "Condition_Groups": [] }

2. Give the percentage of column1
    Expected Output: {"Expression": ""column1 (num)"/ 100 * 100", "Condition_Groups": [] }

3. Assuming the total (column1, column2, column3) is 500, give the percentage of those columns
    Expected Output: {"Expression": "("column1 (num)" + "column2 (num)" + "column3 (num)") / 500 * 100", "Condition_Groups": [] }

4. Give the mean of column1 where column3 is less than 150.
  Expected Output: {
      "Expression": "AVG("column1 (num)")",
      "Condition_Groups": [
          {"Column_Name": "column3 (num)", "Column_Operator": "is less than", "Operand_Type": "Value", "Operand": [150]}
      ]
  }

5. Give the column1 where column2 >= column3
   Expected Output: {
      "Expression": ""column1 (num)"",
      "Condition_Groups": [
          {"Column_Name": "column2 (num)", "Column_Operator": "is greater than or equal to", "Operand_Type": "Column Value", "Operand": ["column3 (num)"]}
      ]
  }

6. Give the score range of column1 where column2 is null/empty
   Expected Output: {
      "Expression": "MAX("column1 (num)") - MIN("column1 (num)")",
      "Condition_Groups": [
          {"Column_Name": "column2 (num)", "Column_Operator": "is Empty", "Operand_Type": "Value", "Operand": ["Null"]}
      ]
  }

7. Give the mean/average of column1 and column5 where column2 is greater than 50 and column3 contains 'pass'.
  Expected Output: {
      "Expression": "("column1 (num)" + "column5 (num)") / 2",
      "Condition_Groups": [
          {
              "Group_Operator": "and",
              "Conditions": [
                  {"Column_Name": "column2 (num)", "Column_Operator": "is greater than", "Operand_Type": "Value", "Operand": [50]},
                  {"Column_Name": "column3 (text)", "Column_Operator": "contains", "Operand_Type": "Value", "Operand": ["pass"]}
              ]
          }
      ]
  }

8. Give column1 where column2 has values 'pass' or 'fail' and column3 has values between 20 and 90
  Expected Output: {
      "Expression": ""column1 (num)"",
      "Condition_Groups": [
          {
              "Group_Operator": "and",
              "Conditions": [
                  {"Column_Name": "column2 (text)", "Column_Operator": "is one of", "Operand_Type": "Value", "Operand": ["pass", "fail"]},
                  {"Column_Name": "column3 (num)", "Column_Operator": "in between", "Operand_Type": "Value", "Operand": [20, 90]}
              ]
          }
      ]
  }
"#;
