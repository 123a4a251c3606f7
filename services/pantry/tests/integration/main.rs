mod article_test;
mod checkin_test;
mod storage_test;
