/*!

This is the long-form manual for `topsis` and the `topsis` command line program.

## The method

TOPSIS (Technique for Order of Preference by Similarity to Ideal Solution) ranks
alternatives that are described by several numeric criteria. Each criterion
comes with a weight (its relative importance) and an impact:
* `+` the criterion is a benefit, higher values are better
* `-` the criterion is a cost, lower values are better

The computation follows these steps:
1. every criterion column is divided by its Euclidean norm
2. every column is multiplied by its weight
3. the ideal best point takes the best value of each column (the maximum for a
   benefit, the minimum for a cost), and the ideal worst point the other extreme
4. for every alternative, the Euclidean distances to the ideal best point and to
   the ideal worst point are computed
5. the score is `distance_worst / (distance_best + distance_worst)`
6. alternatives are ranked by decreasing score. Equal scores share the same rank
   and the following rank is skipped (1, 1, 3)

Multiplying all the weights by the same positive number does not change the
scores.

## Input format

The input is a table with a header row. The first column is the identifier of
the alternative and is never interpreted. All the other columns are criteria and
must only contain numbers.

```text
Model,Price,Storage,Camera,Looks
M1,250,16,12,5
M2,200,16,8,3
M3,300,32,16,4
M4,275,32,8,4
M5,225,16,16,2
```

Both CSV files (with any single character delimiter) and Excel files (`.xlsx`)
are supported.

## Output format

The output is the input table with two more columns: `Topsis Score` and `Rank`.
The cells of the input are copied as they were read.
The output is always a CSV file. It uses the delimiter of the CSV input, and a
comma (`,`) when the input is an Excel file. With the weights `1,1,1,1`
and the impacts `-,+,+,+`, the table above becomes:

```text
Model,Price,Storage,Camera,Looks,Topsis Score,Rank
M1,250,16,12,5,0.5342768571821003,3
M2,200,16,8,3,0.3083677687324685,5
M3,300,32,16,4,0.6916322312675315,1
M4,275,32,8,4,0.534736584486838,2
M5,225,16,16,2,0.40104612151678615,4
```

## Undefined scores

Some inputs do not lead to a score:
- a criterion that is zero for every alternative cannot be normalized
- an alternative that is at the same time the ideal best and the ideal worst
  point (for example when there is a single alternative)

The computation does not stop in these cases. The score is `NaN`, the rank is
left empty and a warning is logged.

## Library usage

```
use topsis::{run_topsis, DecisionMatrix, RawTable};

let table = RawTable {
    header: vec!["Model".into(), "Price".into(), "Storage".into()],
    rows: vec![
        vec!["M1".into(), "250".into(), "16".into()],
        vec!["M2".into(), "200".into(), "32".into()],
    ],
};
let matrix = DecisionMatrix::from_table(&table, &[1.0, 1.0], &["-", "+"])?;
let result = run_topsis(&matrix);
assert_eq!(result.alternatives[1].rank, Some(1));
# Ok::<(), topsis::TopsisError>(())
```

 */
