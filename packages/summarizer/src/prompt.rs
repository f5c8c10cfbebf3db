/// Prompt asking for a categorized weekly summary of `raw_updates`.
///
/// The model is told to answer [`crate::NO_SUMMARY`] when the updates touch a
/// single repository.
#[must_use]
pub fn weekly_prompt(raw_updates: &str) -> String {
    format!(
        "你将收到一周内学生们在各个课程仓库中的更新记录。
请根据这些原始更新，生成一个简洁清晰的「每周更新摘要」，要求如下：

1. 按照课程进行归类，不需要逐日分开。
2. 同一门课程的多条类似更新请合并，避免重复啰嗦。
3. 重点突出：
   - 新增的资料、作业、代码、讲义、教材、试卷等。
   - 对课程说明/文档的重要修改。
   - 有价值的合并更新（如 OpenCS 内容）。
4. 对琐碎操作（如删除无意义的 README、文件改名、格式小改）只需一句话笼统概括。
5. **如果一周内仅有一个仓库更新，请直接输出 \"{no_summary}\"，不要生成摘要。**
6. 输出风格应简洁明了，适合在新闻模块展示。
7. 请以 \"## 本周更新摘要\" 作为第一行标题。

下面是原始更新内容：

{raw_updates}

请生成总结。",
        no_summary = crate::NO_SUMMARY,
    )
}
