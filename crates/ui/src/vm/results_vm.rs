use services::quiz::QuizResults;

use super::time_fmt::format_seconds;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRowVm {
    pub number: usize,
    pub prompt: String,
    pub your_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    pub seconds: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score: usize,
    pub total: usize,
    pub percent: usize,
    pub total_time_str: String,
    pub category: String,
    pub difficulty: String,
    pub rows: Vec<ResultRowVm>,
}

#[must_use]
pub fn map_results(results: &QuizResults) -> ResultsVm {
    let rows = results
        .questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let answer = results.answers.get(index).cloned().flatten();
            ResultRowVm {
                number: index + 1,
                prompt: question.prompt().to_owned(),
                is_correct: question.is_correct(answer.as_deref()),
                your_answer: answer.unwrap_or_else(|| "No answer".to_owned()),
                correct_answer: question.correct_answer().to_owned(),
                seconds: results.elapsed_seconds.get(index).copied().unwrap_or(0),
            }
        })
        .collect();

    let percent = if results.total == 0 {
        0
    } else {
        results.score * 100 / results.total
    };

    ResultsVm {
        score: results.score,
        total: results.total,
        percent,
        total_time_str: format_seconds(results.total_seconds()),
        category: results.category.clone(),
        difficulty: results.difficulty.clone(),
        rows,
    }
}
